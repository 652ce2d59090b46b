//! Song catalog: the track model, where the catalog lives and how it is fetched.
//!
//! The catalog is a JSON array of `{ title, artist, audioUrl }` records read
//! once at startup from a file or an `http(s)://` URL.

mod fetch;
mod model;
mod select;
mod source;

pub use fetch::*;
pub use model::*;
pub use select::*;
pub use source::*;
