use std::fs;

use casement_common::PlatformError;

use super::resolve::{config_dir, data_dir, window_state_dir};

/// Creates all Casement directories if they do not already exist.
///
/// Creates: config_dir, data_dir, and window_state_dir.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(window_state_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
