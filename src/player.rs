//! Playback wrapper: drives the media handle and keeps the now-playing view
//! (label, time text, seek position, play icon) in sync with it.

mod format;
mod model;

pub use format::*;
pub use model::*;
