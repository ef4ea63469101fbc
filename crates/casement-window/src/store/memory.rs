use std::collections::HashMap;

use casement_common::{Rect, StoreError};

use super::GeometryStore;

/// Volatile store for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Rect>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GeometryStore for MemoryStore {
    fn load(&self, key: &str) -> Option<Rect> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: Rect) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
