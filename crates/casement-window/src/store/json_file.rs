use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use casement_common::{Rect, StoreError};
use tracing::{debug, info, warn};

use super::GeometryStore;

/// One JSON file per key: `<dir>/<key>.json` holding
/// `{"x":..,"y":..,"width":..,"height":..}`.
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so a
/// crash mid-write leaves the previous geometry intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Keys become file names, so anything that could
    /// escape the store directory is rejected.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\', '\0']) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl GeometryStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<Rect> {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                warn!("cannot read window geometry: {e}");
                return None;
            }
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no saved geometry at {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("failed to read {}: {e}", path.display());
                return None;
            }
        };

        match serde_json::from_str::<Rect>(&content) {
            Ok(rect) => Some(rect),
            Err(e) => {
                warn!("ignoring corrupt geometry in {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: Rect) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let json = serde_json::to_string_pretty(&value)?;

        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        // Write beside the target, then rename over it
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            // Renaming over an open file fails on some platforms
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&path, &json).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let _ = std::fs::remove_file(&tmp_path);
        }

        info!("saved window geometry {value} to {}", path.display());
        Ok(())
    }
}
