//! Desktop tile chrome and surface allocation settings.

use serde::{Deserialize, Serialize};

/// Desktop tile configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// Corner radius of the tile background in pixels (valid range: 0.0-128.0).
    pub task_corner_radius: f32,
    /// Background tint as `#rrggbb` or `#rrggbbaa`.
    pub background_tint: String,
    /// Label shown next to the shared desktop icon.
    pub icon_label: String,
    /// Allocate a dedicated preview surface per bind instead of reusing
    /// pooled ones.
    pub use_direct_allocation: bool,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            task_corner_radius: 24.0,
            background_tint: "#b8c8d8".into(),
            icon_label: "Desktop".into(),
            use_direct_allocation: false,
        }
    }
}
