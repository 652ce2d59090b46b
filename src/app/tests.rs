use super::*;
use crate::audio::fake::FakeEngine;
use crate::catalog::Track;
use crate::player::{Player, TransportState};

fn t(title: &str, artist: &str) -> Track {
    Track {
        title: title.into(),
        artist: artist.into(),
        audio_url: format!("songs/{title}.mp3"),
    }
}

fn catalog() -> Vec<Track> {
    vec![
        t("Aami", "Fossils"),
        t("Softly", "Karan Aujla"),
        t("Bairiyaa", "Fossils"),
        t("Tauba Tauba", "Karan Aujla"),
        t("Hasnuhana", "Fossils"),
        t("Kesariya", "Arijit Singh"),
    ]
}

fn app() -> App<FakeEngine> {
    App::new(catalog(), Player::new(FakeEngine::default()))
}

fn started() -> App<FakeEngine> {
    let mut a = app();
    assert!(a.start("Fossils"));
    a
}

fn playlist_titles(a: &App<FakeEngine>) -> Vec<String> {
    a.playlist.tracks().iter().map(|t| t.title.clone()).collect()
}

fn loaded_title(a: &App<FakeEngine>) -> Option<String> {
    a.player.loaded().map(|t| t.title.clone())
}

#[test]
fn start_cues_default_artist_without_playing() {
    let a = started();

    assert_eq!(playlist_titles(&a), vec!["Aami", "Bairiyaa", "Hasnuhana"]);
    assert_eq!(a.current_index(), Some(0));
    assert_eq!(a.player.transport(), TransportState::Paused);
    assert_eq!(a.player.view().label, "Aami - Fossils");
    assert!(a.status.is_none());
}

#[test]
fn start_falls_back_to_first_artist_when_default_is_missing() {
    let mut a = app();
    assert!(a.start("Nobody"));
    assert_eq!(playlist_titles(&a), vec!["Aami", "Bairiyaa", "Hasnuhana"]);
}

#[test]
fn start_with_empty_catalog_stays_idle_without_rendering() {
    let mut a = App::new(Vec::new(), Player::new(FakeEngine::default()));

    assert!(!a.start("Fossils"));
    assert!(a.playlist.is_empty());
    assert_eq!(a.playlist.rows().len(), 0);
    assert_eq!(a.current_index(), None);
    assert_eq!(a.player.transport(), TransportState::Idle);
    assert_eq!(a.status.as_deref(), Some(NO_CATALOG_STATUS));

    // Controls stay harmless.
    assert!(!a.next());
    assert!(!a.previous());
    a.toggle_play_pause();
    assert!(!a.seek_to(0.5));
    assert!(!a.select_group("Fossils"));
}

#[test]
fn selecting_a_group_plays_its_ordered_subsequence() {
    let mut a = started();

    assert!(a.select_group("Karan Aujla"));

    assert_eq!(playlist_titles(&a), vec!["Softly", "Tauba Tauba"]);
    assert_eq!(a.current_index(), Some(0));
    assert_eq!(a.player.transport(), TransportState::Playing);
    assert_eq!(a.player.view().label, "Softly - Karan Aujla");
}

#[test]
fn selecting_an_unknown_group_changes_nothing() {
    let mut a = started();
    assert!(!a.select_group("Nobody"));
    assert_eq!(playlist_titles(&a), vec!["Aami", "Bairiyaa", "Hasnuhana"]);
    assert_eq!(a.player.transport(), TransportState::Paused);
}

#[test]
fn previous_at_first_track_is_a_noop() {
    let mut a = started();
    assert!(!a.previous());
    assert_eq!(loaded_title(&a).as_deref(), Some("Aami"));
    assert_eq!(a.current_index(), Some(0));
    assert_eq!(a.player.transport(), TransportState::Paused);
}

#[test]
fn next_at_last_track_is_a_noop() {
    let mut a = started();
    assert!(a.next());
    assert!(a.next());
    assert_eq!(loaded_title(&a).as_deref(), Some("Hasnuhana"));

    assert!(!a.next());
    assert_eq!(loaded_title(&a).as_deref(), Some("Hasnuhana"));
    assert_eq!(a.current_index(), Some(2));
}

#[test]
fn next_then_previous_returns_to_the_same_track() {
    let mut a = started();
    assert!(a.next());
    assert_eq!(loaded_title(&a).as_deref(), Some("Bairiyaa"));
    assert_eq!(a.player.transport(), TransportState::Playing);

    assert!(a.next());
    assert!(a.previous());
    assert_eq!(loaded_title(&a).as_deref(), Some("Bairiyaa"));
    assert_eq!(a.current_index(), Some(1));
}

#[test]
fn navigation_follows_position_even_with_duplicate_titles() {
    let songs = vec![t("Intro", "X"), t("Intro", "X"), t("Outro", "X")];
    let mut a = App::new(songs, Player::new(FakeEngine::default()));
    a.start("X");

    assert!(a.next());
    assert_eq!(a.current_index(), Some(1));
    assert!(a.next());
    assert_eq!(loaded_title(&a).as_deref(), Some("Outro"));
}

#[test]
fn activating_a_row_plays_it_and_closes_the_panel() {
    let mut a = started();
    a.panel_open = true;

    let binding = a.playlist.binding(2).unwrap();
    assert!(a.activate_row(binding));

    assert_eq!(loaded_title(&a).as_deref(), Some("Hasnuhana"));
    assert_eq!(a.current_index(), Some(2));
    assert_eq!(a.playlist.cursor(), 2);
    assert_eq!(a.player.transport(), TransportState::Playing);
    assert!(!a.panel_open);

    assert!(a.previous());
    assert_eq!(loaded_title(&a).as_deref(), Some("Bairiyaa"));
}

#[test]
fn rows_from_an_earlier_playlist_never_fire() {
    let mut a = started();
    let stale = a.playlist.binding(1).unwrap();

    a.select_group("Karan Aujla");
    assert!(!a.activate_row(stale));
    assert_eq!(loaded_title(&a).as_deref(), Some("Softly"));
}

#[test]
fn selecting_a_group_closes_the_panel() {
    let mut a = started();
    a.toggle_panel();
    assert!(a.panel_open);

    a.select_group("Arijit Singh");
    assert!(!a.panel_open);
}

#[test]
fn group_cursor_selects_visible_card() {
    let mut a = started();
    assert_eq!(a.groups.names(), ["Fossils", "Karan Aujla", "Arijit Singh"]);

    a.groups.cursor_next();
    assert!(a.select_group_at_cursor());
    assert_eq!(playlist_titles(&a), vec!["Softly", "Tauba Tauba"]);
}

#[test]
fn group_filter_is_case_insensitive_substring() {
    let mut a = started();
    a.groups.set_query("  KARAN ");
    assert_eq!(a.groups.visible(), vec!["Karan Aujla"]);

    a.groups.set_query("s");
    assert_eq!(a.groups.visible(), vec!["Fossils", "Arijit Singh"]);
}

#[test]
fn group_filter_without_matches_hides_all_and_escape_restores_order() {
    let mut a = started();
    a.groups.open_search();
    for c in "zzz".chars() {
        a.groups.push_query_char(c);
    }
    assert!(a.groups.visible().is_empty());
    assert_eq!(a.groups.selected(), None);
    assert!(!a.select_group_at_cursor());

    a.groups.clear_search();
    assert_eq!(
        a.groups.visible(),
        vec!["Fossils", "Karan Aujla", "Arijit Singh"]
    );
    assert!(!a.groups.search_active());
    assert_eq!(a.groups.query(), "");
}

#[test]
fn dismissing_search_keeps_box_open_while_it_has_text() {
    let mut a = started();
    a.groups.open_search();
    a.groups.push_query_char('f');
    a.groups.dismiss_search();
    assert!(a.groups.search_active());

    a.groups.pop_query_char();
    a.groups.dismiss_search();
    assert!(!a.groups.search_active());
}

#[test]
fn volume_changes_are_clamped() {
    let mut a = started();
    assert_eq!(a.player.volume(), 1.0);
    a.change_volume(0.5);
    assert_eq!(a.player.volume(), 1.0);
    a.set_volume(0.3);
    a.change_volume(-0.5);
    assert_eq!(a.player.volume(), 0.0);
}

#[test]
fn toggle_focus_alternates_panes() {
    let mut a = started();
    assert_eq!(a.focus, Focus::Groups);
    a.toggle_focus();
    assert_eq!(a.focus, Focus::Playlist);
    a.toggle_focus();
    assert_eq!(a.focus, Focus::Groups);
}
