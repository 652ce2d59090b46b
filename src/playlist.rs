//! The visible song list for the active playlist.
//!
//! Rows are rebuilt from scratch on every render. Activation goes through
//! `RowBinding` tokens stamped with the render generation, so a binding taken
//! from an earlier render can never start playback.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
