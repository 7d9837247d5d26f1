use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::{KeyValueStorage, StorageError};

/// In-memory storage for testing and the native fallback.
///
/// Clones share the same namespace, the way every `localStorage` handle in a
/// browser tab sees the same origin data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses to hold more than `max_keys` keys, like a
    /// browser whose `localStorage` quota is exhausted. Overwriting an
    /// existing key always succeeds.
    pub fn with_quota(max_keys: usize) -> Self {
        Self {
            quota: Some(max_keys),
            ..Self::default()
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(quota) = self.quota {
            if !entries.contains_key(key) && entries.len() >= quota {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: format!("quota of {quota} keys exceeded"),
                });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
