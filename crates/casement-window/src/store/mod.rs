//! Persisted window geometry, keyed `"<namespace>-<window name>"`.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use casement_common::{Rect, StoreError};

/// Durable key to rectangle storage.
///
/// Reads fail open: anything missing, unreadable or corrupt is reported as
/// absent. Writes report failure so the caller can log it; the window
/// keeps working either way.
pub trait GeometryStore {
    /// The stored rectangle for `key`, if one can be read.
    fn load(&self, key: &str) -> Option<Rect>;

    /// Persists `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Rect) -> Result<(), StoreError>;

    /// The stored rectangle for `key`, or `default`.
    fn get(&self, key: &str, default: Rect) -> Rect {
        self.load(key).unwrap_or(default)
    }
}

impl<S: GeometryStore + ?Sized> GeometryStore for &mut S {
    fn load(&self, key: &str) -> Option<Rect> {
        (**self).load(key)
    }

    fn set(&mut self, key: &str, value: Rect) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: GeometryStore + ?Sized> GeometryStore for Box<S> {
    fn load(&self, key: &str) -> Option<Rect> {
        (**self).load(key)
    }

    fn set(&mut self, key: &str, value: Rect) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
