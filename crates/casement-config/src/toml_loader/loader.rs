//! Reading config files. Nothing here validates; see [`crate::load_config`].

use crate::schema::CasementConfig;
use casement_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Parses the TOML file at `path`. Missing fields take their defaults.
pub fn load_from_path(path: &Path) -> Result<CasementConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = toml::from_str::<CasementConfig>(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the commented default there first if
/// the file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<CasementConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(CasementConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// [`load_or_create`] at [`default_config_path`].
pub fn load_default() -> Result<CasementConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}
