//! Preview surface pooling: reuse of expensive surfaces across binds.

mod operations;
mod source;
mod types;

pub use source::SurfaceSource;
pub use types::*;
