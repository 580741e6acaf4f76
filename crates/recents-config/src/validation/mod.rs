//! Full configuration validation.
//!
//! Validates all numeric ranges and color formats. Each section has its
//! own submodule; this orchestrator calls them all and collects errors into
//! a single `ConfigError`.

mod device;
mod helpers;
mod pool;
mod tile;


use crate::schema::RecentsConfig;
use recents_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RecentsConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    device::validate_device(&mut errors, config);
    tile::validate_tile(&mut errors, config);
    pool::validate_pool(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
