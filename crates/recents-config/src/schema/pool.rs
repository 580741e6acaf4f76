//! Preview surface pool sizing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Most idle surfaces kept for reuse (valid range: 1-64).
    pub max_size: u32,
    /// Surfaces allocated up front (valid range: 0-64, at most `max_size`).
    /// Desktop tiles are built off the interactive path, so this stays 0.
    pub initial_size: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            initial_size: 0,
        }
    }
}
