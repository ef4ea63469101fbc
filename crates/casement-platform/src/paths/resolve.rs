use std::path::PathBuf;

use casement_common::PlatformError;

pub(super) const APP_NAME: &str = "casement";

/// Returns the platform-specific configuration directory for Casement.
///
/// - macOS: `~/Library/Application Support/casement`
/// - Linux: `$XDG_CONFIG_HOME/casement` (defaults to `~/.config/casement`)
/// - Windows: `%APPDATA%\casement`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Casement.
///
/// - macOS: `~/Library/Application Support/casement`
/// - Linux: `$XDG_DATA_HOME/casement` (defaults to `~/.local/share/casement`)
/// - Windows: `%APPDATA%\casement`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
///
/// Located at `config_dir()/config.toml`.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the directory holding persisted window geometry.
///
/// Located at `data_dir()/window-state`.
pub fn window_state_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("window-state"))
}
