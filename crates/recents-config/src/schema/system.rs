//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the recents crates at this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "recents=trace",
            LogLevel::Debug => "recents=debug",
            LogLevel::Info => "recents=info",
            LogLevel::Warning => "recents=warn",
            LogLevel::Error => "recents=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
