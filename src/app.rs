//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the active
//! playlist, the player and the view flags; `app::groups` holds the artist
//! cards and their search filter.

mod groups;
mod model;

pub use groups::GroupList;
pub use model::*;

#[cfg(test)]
mod tests;
