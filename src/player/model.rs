use std::time::Duration;

use crate::audio::MediaEngine;
use crate::catalog::Track;

use super::format::{RESET_TIME_TEXT, format_time};

/// Transport state of the playback handle.
///
/// `Idle` until the first load; there is no way back to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransportState {
    #[default]
    Idle,
    Paused,
    Playing,
}

/// The play/pause indicator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlayIcon {
    Playing,
    #[default]
    Paused,
}

impl PlayIcon {
    /// Glyph of the button: a pause bar while playing, a play triangle otherwise.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Playing => "⏸",
            Self::Paused => "▶",
        }
    }
}

/// What the play bar shows.
#[derive(Clone, Debug, PartialEq)]
pub struct NowPlayingView {
    pub label: String,
    pub time_text: String,
    /// Seek indicator position, 0.0 - 100.0.
    pub seek_percent: f64,
    pub icon: PlayIcon,
}

impl Default for NowPlayingView {
    fn default() -> Self {
        Self {
            label: String::new(),
            time_text: RESET_TIME_TEXT.to_string(),
            seek_percent: 0.0,
            icon: PlayIcon::Paused,
        }
    }
}

pub struct Player<E: MediaEngine> {
    engine: E,
    transport: TransportState,
    loaded: Option<Track>,
    view: NowPlayingView,
}

impl<E: MediaEngine> Player<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            transport: TransportState::Idle,
            loaded: None,
            view: NowPlayingView::default(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn view(&self) -> &NowPlayingView {
        &self.view
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    pub fn loaded(&self) -> Option<&Track> {
        self.loaded.as_ref()
    }

    /// Load `track` into the handle, starting playback when `autoplay` is set.
    ///
    /// Any previous source is superseded; the label and time text reset.
    pub fn load(&mut self, track: &Track, autoplay: bool) {
        self.engine.set_source(&track.audio_url);
        if autoplay {
            self.engine.play();
            self.set_transport(TransportState::Playing);
        } else {
            self.set_transport(TransportState::Paused);
        }

        self.view.label = track.now_playing_label();
        self.view.time_text = RESET_TIME_TEXT.to_string();
        self.view.seek_percent = 0.0;
        self.loaded = Some(track.clone());
        log::debug!(
            "loaded {:?} ({})",
            self.view.label,
            if autoplay { "playing" } else { "paused" }
        );
    }

    /// Resume when paused, pause when playing. No-op before the first load.
    pub fn toggle_play_pause(&mut self) {
        match self.transport {
            TransportState::Idle => {}
            TransportState::Paused => self.resume(),
            TransportState::Playing => {
                self.engine.pause();
                self.set_transport(TransportState::Paused);
            }
        }
    }

    fn resume(&mut self) {
        self.engine.play();
        self.set_transport(TransportState::Playing);
    }

    fn set_transport(&mut self, state: TransportState) {
        self.transport = state;
        self.view.icon = match state {
            TransportState::Playing => PlayIcon::Playing,
            TransportState::Idle | TransportState::Paused => PlayIcon::Paused,
        };
    }

    /// Duration usable as a divisor: known and non-zero.
    fn known_duration(&self) -> Option<Duration> {
        self.engine.duration().filter(|d| !d.is_zero())
    }

    /// Jump to `fraction` of the track and make sure it is playing.
    ///
    /// Ignored (returns `false`) before the first load, while the duration is
    /// unknown, or for a non-finite fraction.
    pub fn seek_to(&mut self, fraction: f64) -> bool {
        if self.transport == TransportState::Idle || !fraction.is_finite() {
            return false;
        }
        let Some(duration) = self.known_duration() else {
            log::debug!("seek ignored: duration not known yet");
            return false;
        };

        let fraction = fraction.clamp(0.0, 1.0);
        self.engine.set_current_time(duration.mul_f64(fraction));
        self.view.seek_percent = fraction * 100.0;
        if self.transport == TransportState::Paused {
            self.resume();
        }
        true
    }

    /// Scrub by `seconds` (negative goes back), clamped to the track.
    pub fn seek_by(&mut self, seconds: i64) -> bool {
        let Some(duration) = self.known_duration() else {
            return false;
        };
        let target = self.engine.current_time().as_secs_f64() + seconds as f64;
        self.seek_to(target / duration.as_secs_f64())
    }

    /// Set playback volume, clamped to 0.0 - 1.0.
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        self.engine.set_volume(volume.clamp(0.0, 1.0));
    }

    pub fn volume(&self) -> f32 {
        self.engine.volume()
    }

    /// React to the engine's time advance: refresh the time text and seek
    /// position. Until the duration is known both stay at their reset values.
    pub fn on_time_update(&mut self) {
        if self.transport == TransportState::Idle {
            return;
        }

        // The engine pauses itself at the end of a track.
        if self.transport == TransportState::Playing && self.engine.is_paused() {
            self.set_transport(TransportState::Paused);
        }

        let Some(duration) = self.known_duration() else {
            self.view.time_text = RESET_TIME_TEXT.to_string();
            self.view.seek_percent = 0.0;
            return;
        };

        let current = self.engine.current_time().as_secs_f64();
        let total = duration.as_secs_f64();
        self.view.time_text = format!("{} / {}", format_time(current), format_time(total));
        self.view.seek_percent = (current / total * 100.0).clamp(0.0, 100.0);
    }
}
