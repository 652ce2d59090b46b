//! Audio subsystem: the single playback handle of the application.
//!
//! `AudioPlayer` owns a background thread driving a `rodio` sink and exposes
//! it through the `MediaEngine` trait, the same surface an HTML media element
//! offers (source, play/pause, current time, duration, volume).

mod engine;
mod media;
mod player;
mod thread;
mod types;

pub use engine::MediaEngine;
pub use player::AudioPlayer;
pub use types::*;

#[cfg(test)]
pub(crate) mod fake;
