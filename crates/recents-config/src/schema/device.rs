//! Device geometry the desktop tile is scaled against.

use serde::{Deserialize, Serialize};

/// Reference "real desktop" geometry and overview chrome metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Width of the full-scale desktop window space in pixels (valid range: 1-16384).
    pub window_width: f32,
    /// Height of the full-scale desktop window space in pixels (valid range: 1-16384).
    pub window_height: f32,
    /// Space reserved above thumbnails for the tile title bar (valid range: 0-256).
    pub thumbnail_top_margin_px: u32,
    /// Corner radius of on-screen windows in pixels (valid range: 0.0-128.0).
    pub window_corner_radius: f32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            window_width: 2560.0,
            window_height: 1600.0,
            thumbnail_top_margin_px: 48,
            window_corner_radius: 16.0,
        }
    }
}
