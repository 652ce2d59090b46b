use std::time::Duration;

/// The operations the playback wrapper needs from a media handle.
///
/// Setters take effect immediately from the caller's point of view: a
/// `current_time` read after `set_current_time` returns the new position.
pub trait MediaEngine {
    /// Replace the current source with `audio_url`; playback stops and the
    /// position resets to zero.
    fn set_source(&mut self, audio_url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn current_time(&self) -> Duration;
    /// Total length of the current source, or `None` until metadata is known.
    fn duration(&self) -> Option<Duration>;
    fn set_current_time(&mut self, position: Duration);
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
}
