use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RecentsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("layout error: {0}")]
    Layout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("pool.max_size = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: pool.max_size = 0 is out of range"
        );
    }

    #[test]
    fn recents_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: RecentsError = config_err.into();
        assert!(matches!(err, RecentsError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn recents_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RecentsError = io_err.into();
        assert!(matches!(err, RecentsError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn recents_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: RecentsError = json_err.into();
        assert!(matches!(err, RecentsError::Json(_)));
    }

    #[test]
    fn layout_error_display() {
        let err = RecentsError::Layout("reference size is zero".into());
        assert_eq!(err.to_string(), "layout error: reference size is zero");
    }
}
