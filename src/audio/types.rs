//! Audio-related small types and handles.
//!
//! This module defines the commands sent to the audio thread and the
//! playback information it shares back with the UI.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::catalog::MediaLocation;

#[derive(Debug, PartialEq)]
pub enum AudioCmd {
    /// Replace the current source; the new sink starts paused at zero.
    Load(MediaLocation),
    /// Resume (or restart, after the end of the track) playback.
    Play,
    /// Pause playback, keeping the position.
    Pause,
    /// Jump to an absolute position in the current source.
    SeekTo(Duration),
    /// Set the output volume (0.0 - 1.0).
    SetVolume(f32),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Location of the loaded source, if any.
    pub source: Option<MediaLocation>,
    /// Elapsed playback time for the current source.
    pub elapsed: Duration,
    /// Total length, once known.
    pub duration: Option<Duration>,
    /// Whether playback is currently active.
    pub playing: bool,
    /// Output volume (0.0 - 1.0).
    pub volume: f32,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            source: None,
            elapsed: Duration::ZERO,
            duration: None,
            playing: false,
            volume: 1.0,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
