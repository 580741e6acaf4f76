//! Layout types: tile scale, per-surface layout params, layout errors.

use serde::Serialize;

/// How a surface is anchored inside the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gravity {
    /// Positioned by explicit left/top offsets from the tile's top-left corner.
    #[default]
    TopLeft,
    /// Stretched over the thumbnail area.
    Fill,
}

/// On-screen placement of a preview surface in tile-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SurfaceLayout {
    pub gravity: Gravity,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Independent horizontal and vertical scale from the reference desktop to
/// the tile's thumbnail area. Aspect ratio is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileScale {
    pub width: f32,
    pub height: f32,
}

/// Everything the thumbnail layout needs to know about the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Full tile size, including the top margin.
    pub container_width: i32,
    pub container_height: i32,
    pub top_margin: i32,
    /// Reference desktop size in whole pixels.
    pub window_width: i32,
    pub window_height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("reference window size {width}x{height} has a zero dimension")]
    DegenerateReference { width: i32, height: i32 },
}
