//! In-memory `MediaEngine` used by unit tests.

use std::time::Duration;

use super::engine::MediaEngine;

#[derive(Debug, Clone)]
pub(crate) struct FakeEngine {
    pub source: Option<String>,
    pub paused: bool,
    pub time: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
    /// Length reported for every source loaded from now on.
    pub next_duration: Option<Duration>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            source: None,
            paused: true,
            time: Duration::ZERO,
            duration: None,
            volume: 1.0,
            next_duration: Some(Duration::from_secs(200)),
        }
    }
}

impl FakeEngine {
    /// Pretend playback advanced to `t`.
    pub fn advance_to(&mut self, t: Duration) {
        self.time = t;
    }

    /// Pretend the track ran out.
    pub fn finish(&mut self) {
        self.time = self.duration.unwrap_or(self.time);
        self.paused = true;
    }
}

impl MediaEngine for FakeEngine {
    fn set_source(&mut self, audio_url: &str) {
        self.source = Some(audio_url.to_string());
        self.paused = true;
        self.time = Duration::ZERO;
        self.duration = self.next_duration;
    }

    fn play(&mut self) {
        self.paused = self.source.is_none();
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> Duration {
        self.time
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_current_time(&mut self, position: Duration) {
        self.time = position;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}
