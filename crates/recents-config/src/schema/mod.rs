//! Configuration schema types for Recents.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod device;
mod pool;
mod system;
mod tile;

pub use device::*;
pub use pool::*;
pub use system::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Recents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct RecentsConfig {
    pub device: DeviceConfig,
    pub tile: TileConfig,
    pub pool: PoolConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
