//! Application model: catalog, active playlist, playback and view flags.

use crate::audio::MediaEngine;
use crate::catalog::{self, Track};
use crate::player::Player;
use crate::playlist::{PlaylistView, RowBinding};

use super::groups::GroupList;

/// Which pane keyboard navigation applies to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Groups,
    Playlist,
}

/// Shown instead of the cards when there is nothing to play.
pub const NO_CATALOG_STATUS: &str = "No songs found";

/// The main application model.
///
/// Owns the one `Player` (and through it the media handle); every playback
/// mutation goes through here.
pub struct App<E: MediaEngine> {
    pub catalog: Vec<Track>,
    pub groups: GroupList,
    pub playlist: PlaylistView,
    pub player: Player<E>,
    current_index: Option<usize>,

    pub focus: Focus,
    pub panel_open: bool,
    pub volume_slider_visible: bool,
    pub status: Option<String>,
}

impl<E: MediaEngine> App<E> {
    pub fn new(catalog: Vec<Track>, player: Player<E>) -> Self {
        let groups = GroupList::new(catalog::artists(&catalog));
        Self {
            catalog,
            groups,
            playlist: PlaylistView::default(),
            player,
            current_index: None,
            focus: Focus::Groups,
            panel_open: false,
            volume_slider_visible: false,
            status: None,
        }
    }

    pub fn has_catalog(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// Index of the loaded track within the active playlist.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Initial load: cue the first song of `default_artist` without playing it.
    ///
    /// Falls back to the first artist of the catalog when `default_artist` has
    /// no songs. With an empty catalog nothing is loaded or rendered and the
    /// app stays idle; returns `false` in that case.
    pub fn start(&mut self, default_artist: &str) -> bool {
        if !self.has_catalog() {
            log::error!("no songs found, nothing to play");
            self.status = Some(NO_CATALOG_STATUS.to_string());
            return false;
        }

        let mut songs = catalog::filter_by_artist(&self.catalog, default_artist);
        if songs.is_empty() {
            let fallback = self.catalog[0].artist.clone();
            log::warn!("no songs by {default_artist:?}, starting with {fallback:?}");
            songs = catalog::filter_by_artist(&self.catalog, &fallback);
        }

        self.show_playlist(songs, false);
        true
    }

    /// Load the first song, then make `songs` the active playlist.
    fn show_playlist(&mut self, songs: Vec<Track>, autoplay: bool) {
        if let Some(first) = songs.first() {
            self.player.load(first, autoplay);
            self.render_playlist(songs);
            self.current_index = Some(0);
        }
    }

    /// Replace the active playlist. The only place it changes.
    fn render_playlist(&mut self, songs: Vec<Track>) {
        self.playlist.render(songs);
        self.current_index = None;
    }

    /// User picked an artist card: play that artist's first song and list the rest.
    ///
    /// Does nothing for an artist without songs.
    pub fn select_group(&mut self, artist: &str) -> bool {
        let songs = catalog::filter_by_artist(&self.catalog, artist);
        if songs.is_empty() {
            return false;
        }
        log::info!("selected {artist:?} ({} songs)", songs.len());
        self.show_playlist(songs, true);
        self.close_panel();
        true
    }

    /// Select the card under the group cursor.
    pub fn select_group_at_cursor(&mut self) -> bool {
        match self.groups.selected().map(str::to_string) {
            Some(name) => self.select_group(&name),
            None => false,
        }
    }

    /// Play the row behind `binding`. Stale bindings are ignored.
    pub fn activate_row(&mut self, binding: RowBinding) -> bool {
        let Some((index, track)) = self.playlist.resolve(binding) else {
            log::debug!("ignored activation of a stale row");
            return false;
        };
        let track = track.clone();
        self.player.load(&track, true);
        self.current_index = Some(index);
        self.playlist.set_cursor(index);
        self.close_panel();
        true
    }

    /// Play the row under the playlist cursor.
    pub fn activate_cursor_row(&mut self) -> bool {
        match self.playlist.binding(self.playlist.cursor()) {
            Some(b) => self.activate_row(b),
            None => false,
        }
    }

    fn play_index(&mut self, index: usize) -> bool {
        let Some(track) = self.playlist.get(index).cloned() else {
            return false;
        };
        self.player.load(&track, true);
        self.current_index = Some(index);
        self.playlist.set_cursor(index);
        true
    }

    /// Play the song before the current one; nothing happens at the first song.
    pub fn previous(&mut self) -> bool {
        match self.current_index {
            Some(i) if i > 0 => self.play_index(i - 1),
            _ => false,
        }
    }

    /// Play the song after the current one; nothing happens at the last song.
    pub fn next(&mut self) -> bool {
        match self.current_index {
            Some(i) if i + 1 < self.playlist.len() => self.play_index(i + 1),
            _ => false,
        }
    }

    pub fn toggle_play_pause(&mut self) {
        self.player.toggle_play_pause();
    }

    pub fn seek_to(&mut self, fraction: f64) -> bool {
        self.player.seek_to(fraction)
    }

    pub fn seek_by(&mut self, seconds: i64) -> bool {
        self.player.seek_by(seconds)
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.player.set_volume(volume);
    }

    pub fn change_volume(&mut self, delta: f32) {
        let v = self.player.volume() + delta;
        self.player.set_volume(v);
    }

    /// Time-advance signal from the engine.
    pub fn tick(&mut self) {
        self.player.on_time_update();
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Groups => Focus::Playlist,
            Focus::Playlist => Focus::Groups,
        };
    }
}
