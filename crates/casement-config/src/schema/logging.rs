//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive scoped to this workspace.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "casement=trace",
            LogLevel::Debug => "casement=debug",
            LogLevel::Info => "casement=info",
            LogLevel::Warn => "casement=warn",
            LogLevel::Error => "casement=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
