//! Where the config file lives, and writing the commented default.

use casement_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// `config.toml` inside the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    casement_platform::config_file().map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn write_error(what: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {what} {}: {e}", path.display()))
}

/// Writes the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_error("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| write_error("write default config to", path, e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
