use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

use super::*;
use crate::app::App;
use crate::audio::fake::FakeEngine;
use crate::catalog::Track;
use crate::player::Player;

fn t(title: &str, artist: &str) -> Track {
    Track {
        title: title.into(),
        artist: artist.into(),
        audio_url: format!("songs/{title}.mp3"),
    }
}

fn started() -> App<FakeEngine> {
    let songs = vec![
        t("Aami", "Fossils"),
        t("Softly", "Karan Aujla"),
        t("Bairiyaa", "Fossils"),
    ];
    let mut app = App::new(songs, Player::new(FakeEngine::default()));
    app.start("Fossils");
    app
}

fn render(app: &App<FakeEngine>, width: u16, height: u16) -> (HitMap, String) {
    let settings = Settings::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut hits = HitMap::default();
    terminal
        .draw(|frame| hits = draw(frame, app, &settings))
        .unwrap();
    (hits, buffer_text(terminal.backend().buffer()))
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn fraction_is_offset_over_width() {
    let area = Rect::new(10, 0, 20, 1);
    assert_eq!(fraction_in(area, 10), 0.0);
    assert_eq!(fraction_in(area, 20), 0.5);
    assert_eq!(fraction_in(area, 5), 0.0);
    assert_eq!(fraction_in(Rect::new(0, 0, 0, 1), 3), 0.0);
}

#[test]
fn slider_spans_both_edges() {
    let area = Rect::new(0, 0, 11, 1);
    assert_eq!(slider_value(area, 0), 0.0);
    assert_eq!(slider_value(area, 10), 1.0);
    assert_eq!(slider_value(area, 5), 0.5);
    assert_eq!(slider_value(Rect::new(0, 0, 1, 1), 0), 1.0);
}

#[test]
fn later_regions_win_and_empty_ones_are_skipped() {
    let mut hits = HitMap::default();
    hits.push(Rect::new(0, 0, 10, 10), Target::Hamburger);
    hits.push(Rect::new(2, 2, 2, 2), Target::Next);
    hits.push(Rect::new(0, 0, 0, 5), Target::Previous);

    assert_eq!(hits.hit(3, 3), Some(Hit::Next));
    assert_eq!(hits.hit(0, 0), Some(Hit::Hamburger));
    assert_eq!(hits.hit(20, 20), None);
    assert_eq!(hits.area_of(&Target::Previous), None);
}

#[test]
fn bar_hits_carry_their_position() {
    let mut hits = HitMap::default();
    hits.push(Rect::new(0, 0, 10, 1), Target::SeekBar);
    hits.push(Rect::new(0, 1, 5, 1), Target::VolumeBar);
    hits.push(Rect::new(6, 1, 3, 1), Target::VolumeIcon);

    assert_eq!(hits.hit(5, 0), Some(Hit::SeekBar(0.5)));
    assert_eq!(hits.hit(4, 1), Some(Hit::VolumeBar(1.0)));
    assert!(hits.is_over_volume(7, 1));
    assert!(hits.is_over_volume(0, 1));
    assert!(!hits.is_over_volume(0, 0));
}

#[test]
fn seek_bar_places_the_indicator() {
    assert_eq!(seek_bar_line(0.0, 5), "●────");
    assert_eq!(seek_bar_line(50.0, 5), "━━●──");
    assert_eq!(seek_bar_line(100.0, 5), "━━━━●");
    assert_eq!(seek_bar_line(f64::NAN, 3), "●──");
    assert_eq!(seek_bar_line(10.0, 0), "");
}

#[test]
fn visible_window_keeps_selection_in_view() {
    assert_eq!(visible_window(3, 10, 2), (0, 3));
    assert_eq!(visible_window(20, 5, 0), (0, 5));
    assert_eq!(visible_window(20, 5, 10), (8, 13));
    assert_eq!(visible_window(20, 5, 19), (15, 20));
}

#[test]
fn controls_text_includes_scrub_seconds() {
    let text = controls_text(7);
    assert!(text.contains("[H/L] seek -/+7s"));
    assert!(text.starts_with("[tab]"));
    assert!(text.ends_with("[q] quit"));
}

#[test]
fn wide_layout_shows_library_and_cards() {
    let app = started();
    let (hits, text) = render(&app, 120, 30);

    assert!(text.contains("Aami - Fossils"));
    assert!(text.contains("0:00 / 3:20") || text.contains("0:00 / 0:00"));
    assert!(text.contains("Karan Aujla"));
    assert!(text.contains("Bairiyaa"));

    let targets: Vec<&Target> = hits.targets().collect();
    assert!(targets.contains(&&Target::Card("Fossils".into())));
    assert!(targets.contains(&&Target::Card("Karan Aujla".into())));
    assert!(targets.contains(&&Target::SeekBar));
    assert!(!targets.contains(&&Target::Hamburger));
    assert!(!targets.contains(&&Target::VolumeBar));

    let rows = targets
        .iter()
        .filter(|t| matches!(t, Target::Row(_)))
        .count();
    assert_eq!(rows, 2);
}

#[test]
fn clicking_a_drawn_row_resolves_to_its_binding() {
    let app = started();
    let (hits, _) = render(&app, 120, 30);

    let second = app.playlist.binding(1).unwrap();
    let area = hits.area_of(&Target::Row(second)).unwrap();
    assert_eq!(hits.hit(area.x + 1, area.y + 1), Some(Hit::Row(second)));
}

#[test]
fn narrow_layout_swaps_cards_for_panel() {
    let mut app = started();
    let (hits, _) = render(&app, 60, 30);
    let targets: Vec<&Target> = hits.targets().collect();
    assert!(targets.contains(&&Target::Hamburger));
    assert!(!targets.iter().any(|t| matches!(t, Target::Row(_))));

    app.toggle_panel();
    let (hits, _) = render(&app, 60, 30);
    let targets: Vec<&Target> = hits.targets().collect();
    assert!(targets.contains(&&Target::ClosePanel));
    assert!(!targets.contains(&&Target::Hamburger));
    assert!(!targets.iter().any(|t| matches!(t, Target::Card(_))));
}

#[test]
fn volume_slider_appears_only_when_visible() {
    let mut app = started();
    app.volume_slider_visible = true;
    let (hits, text) = render(&app, 120, 30);

    assert!(hits.area_of(&Target::VolumeBar).is_some());
    assert!(text.contains("100%"));
}

#[test]
fn filtered_out_cards_are_not_clickable() {
    let mut app = started();
    app.groups.set_query("karan");
    let (hits, _) = render(&app, 120, 30);

    assert!(hits.area_of(&Target::Card("Karan Aujla".into())).is_some());
    assert!(hits.area_of(&Target::Card("Fossils".into())).is_none());

    app.groups.set_query("zzz");
    let (_, text) = render(&app, 120, 30);
    assert!(text.contains("No artists match"));
}

#[test]
fn empty_catalog_shows_status_and_no_rows() {
    let mut app = App::new(Vec::new(), Player::new(FakeEngine::default()));
    app.start("Fossils");
    let (hits, text) = render(&app, 120, 30);

    assert!(text.contains(crate::app::NO_CATALOG_STATUS));
    assert!(text.contains("0:00 / 0:00"));
    assert!(!hits.targets().any(|t| matches!(t, Target::Row(_) | Target::Card(_))));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = started();
    let (hits, _) = render(&app, 10, 4);
    assert!(hits.hit(200, 200).is_none());
}
