//! The TileController owns a tile's chrome, its current generation of
//! window bindings, and the surfaces backing them.

mod launching;
mod lifecycle;
mod loading;
mod sizing;
mod snapshot;
mod types;

pub use snapshot::{BackgroundSnapshot, TileSnapshot, WindowSnapshot};
pub use types::*;
