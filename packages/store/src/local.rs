//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] implementation used on the **web
//! platform**. It looks up `window.localStorage` on every call rather than
//! holding a `web_sys::Storage`, so the handle stays `Clone` and `'static`.
//!
//! ## Error handling
//!
//! Browser storage can be unavailable (privacy mode, sandboxed iframes) or full.
//! Read and remove failures are logged and swallowed: reads return `None`,
//! removes do nothing. Write failures are logged and returned as
//! [`StorageError`], so a login that could not be persisted is reported
//! instead of leaving memory and storage out of step.

use crate::storage::{KeyValueStorage, StorageError};

/// `window.localStorage`-backed storage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {} from localStorage: {:?}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| {
            tracing::warn!("Failed to write {} to localStorage: {:?}", key, e);
            StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            }
        })
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {} from localStorage: {:?}", key, e);
        }
    }
}
