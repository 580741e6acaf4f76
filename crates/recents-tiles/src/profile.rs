//! Device geometry and tile settings resolved from configuration.

use recents_common::types::Color;
use recents_config::RecentsConfig;
use tracing::warn;

/// Geometry of the real desktop that window bounds are expressed in, plus
/// the overview chrome metrics that depend on the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    pub window_width: f32,
    pub window_height: f32,
    pub thumbnail_top_margin_px: i32,
    pub window_corner_radius: f32,
}

impl DeviceProfile {
    /// Reference window size in whole pixels. Fractional dimensions are
    /// truncated, not rounded.
    pub fn task_dimension(&self) -> (i32, i32) {
        (self.window_width as i32, self.window_height as i32)
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::from(&RecentsConfig::default())
    }
}

impl From<&RecentsConfig> for DeviceProfile {
    fn from(config: &RecentsConfig) -> Self {
        Self {
            window_width: config.device.window_width,
            window_height: config.device.window_height,
            thumbnail_top_margin_px: i32::try_from(config.device.thumbnail_top_margin_px)
                .unwrap_or(i32::MAX),
            window_corner_radius: config.device.window_corner_radius,
        }
    }
}

/// Per-tile settings: chrome appearance and surface allocation policy.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSettings {
    pub task_corner_radius: f32,
    pub background_tint: Color,
    pub icon_label: String,
    pub use_direct_allocation: bool,
    pub pool_max_size: usize,
    pub pool_initial_size: usize,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self::from(&RecentsConfig::default())
    }
}

impl From<&RecentsConfig> for TileSettings {
    fn from(config: &RecentsConfig) -> Self {
        let background_tint = Color::from_hex(&config.tile.background_tint).unwrap_or_else(|| {
            warn!(
                tint = %config.tile.background_tint,
                "invalid background tint, using neutral grey"
            );
            Color::from_rgba(0xb8, 0xc8, 0xd8, 0xff)
        });
        Self {
            task_corner_radius: config.tile.task_corner_radius,
            background_tint,
            icon_label: config.tile.icon_label.clone(),
            use_direct_allocation: config.tile.use_direct_allocation,
            pool_max_size: config.pool.max_size as usize,
            pool_initial_size: config.pool.initial_size as usize,
        }
    }
}
