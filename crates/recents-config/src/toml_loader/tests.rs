//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use super::template::default_config_toml;
use crate::schema::RecentsConfig;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_recents_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, recents_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[device]
window_width = 1920.0
window_height = 1080.0

[tile]
background_tint = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.device.window_width - 1920.0).abs() < f32::EPSILON);
    assert_eq!(config.tile.background_tint, "#ff0000");
    // Defaults preserved
    assert_eq!(config.device.thumbnail_top_margin_px, 48);
    assert_eq!(config.pool.max_size, 10);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, recents_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[pool]
max_size = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.pool.max_size, 10);
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[device]"));
    assert!(content.contains("[pool]"));
}

#[test]
fn default_template_parses_to_defaults() {
    let config: RecentsConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.pool.max_size, 10);
    assert!(!config.tile.use_direct_allocation);
}

#[test]
fn default_config_path_ends_with_recents_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with(Path::new("recents").join("config.toml")));
    }
}
