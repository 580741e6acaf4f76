//! Recents configuration system.
//!
//! TOML-based configuration for overview tiles: the reference desktop
//! geometry, tile chrome, the preview surface pool, and logging. All
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use recents_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::RecentsConfig;

use recents_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<RecentsConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path, or the platform default when `None`.
pub fn load_config_from(path: Option<&Path>) -> Result<RecentsConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &RecentsConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = RecentsConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"device\""));
        assert!(json.contains("\"tile\""));
        assert!(json.contains("\"pool\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = RecentsConfig::default();
        let json = config_to_json(&config);
        let parsed: RecentsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.pool.max_size, 10);
        assert_eq!(parsed.pool.initial_size, 0);
        assert_eq!(parsed.tile.icon_label, "Desktop");
    }

    #[test]
    fn load_config_from_explicit_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pool]\nmax_size = 4\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.pool.max_size, 4);
    }
}
