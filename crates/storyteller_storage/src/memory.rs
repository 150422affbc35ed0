//! In-memory store for tests and throwaway runs.

use crate::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;
use storyteller_core::StorageScope;
use storyteller_error::{StorageError, StorageErrorKind, StorytellerResult};

/// Both scopes held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(StorageScope, String), String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one pre-populated entry.
    pub fn with_entry(scope: StorageScope, key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert((scope, key.to_string()), value.to_string());
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, scope: StorageScope, key: &str) -> StorytellerResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::new(StorageErrorKind::Unavailable(e.to_string())))?;
        Ok(entries.get(&(scope, key.to_string())).cloned())
    }

    fn set(&self, scope: StorageScope, key: &str, value: &str) -> StorytellerResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::new(StorageErrorKind::Unavailable(e.to_string())))?;
        entries.insert((scope, key.to_string()), value.to_string());
        Ok(())
    }
}
