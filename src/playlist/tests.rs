use super::*;
use crate::catalog::Track;

fn t(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: "Fossils".into(),
        audio_url: format!("{title}.mp3"),
    }
}

#[test]
fn render_shows_one_row_per_track_in_order() {
    let mut view = PlaylistView::default();
    view.render(vec![t("Aami"), t("Bairiyaa"), t("Hasnuhana")]);

    let titles: Vec<&str> = view.rows().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Aami", "Bairiyaa", "Hasnuhana"]);
    assert!(view.rows().iter().all(|r| r.artist == "Fossils"));
    assert_eq!(view.len(), 3);
}

#[test]
fn render_is_idempotent_for_the_same_input() {
    let tracks = vec![t("Aami"), t("Bairiyaa")];
    let mut view = PlaylistView::default();

    view.render(tracks.clone());
    let first = view.rows().to_vec();
    view.render(tracks);

    assert_eq!(view.rows(), first.as_slice());
}

#[test]
fn binding_resolves_to_the_track_of_its_render() {
    let mut view = PlaylistView::default();
    view.render(vec![t("Aami"), t("Bairiyaa")]);

    let b = view.binding(1).unwrap();
    let (index, track) = view.resolve(b).unwrap();
    assert_eq!(index, 1);
    assert_eq!(track.title, "Bairiyaa");
    assert!(view.binding(2).is_none());
}

#[test]
fn stale_bindings_do_not_resolve_after_rerender() {
    let mut view = PlaylistView::default();
    view.render(vec![t("Aami"), t("Bairiyaa")]);
    let stale = view.binding(0).unwrap();

    view.render(vec![t("Aami"), t("Bairiyaa")]);
    assert!(view.resolve(stale).is_none());

    let fresh = view.binding(0).unwrap();
    assert!(view.resolve(fresh).is_some());
}

#[test]
fn cursor_wraps_and_resets_on_render() {
    let mut view = PlaylistView::default();
    view.cursor_next();
    assert_eq!(view.cursor(), 0);

    view.render(vec![t("a"), t("b"), t("c")]);
    view.cursor_prev();
    assert_eq!(view.cursor(), 2);
    view.cursor_next();
    assert_eq!(view.cursor(), 0);
    view.set_cursor(1);
    assert_eq!(view.cursor(), 1);
    view.set_cursor(9);
    assert_eq!(view.cursor(), 1);

    view.render(vec![t("d")]);
    assert_eq!(view.cursor(), 0);
}
