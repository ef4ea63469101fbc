//! Window geometry store configuration.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STORE_NAMESPACE: &str = "window-state";

/// Where persisted window geometry lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Prefix of every geometry key: `<namespace>-<window name>`.
    pub namespace: String,
    /// Directory holding the geometry files. `None` uses the platform
    /// data directory. An empty string reads as `None`.
    #[serde(deserialize_with = "empty_path_as_none")]
    pub directory: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_STORE_NAMESPACE.into(),
            directory: None,
        }
    }
}

fn empty_path_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PathBuf>, D::Error> {
    let path = Option::<PathBuf>::deserialize(deserializer)?;
    Ok(path.filter(|p| !p.as_os_str().is_empty()))
}
