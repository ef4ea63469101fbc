use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("display query error: {0}")]
    DisplayError(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures writing persisted window geometry.
///
/// Reads never produce one of these: a missing or unreadable record is
/// treated as absent and the caller's default is used instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid store key: {0}")]
    InvalidKey(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CasementError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
