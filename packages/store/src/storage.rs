//! # Key/value storage seam
//!
//! [`KeyValueStorage`] mirrors the browser `localStorage` API: string keys,
//! string values, synchronous access. Implementations live in sibling modules
//! ([`crate::memory`] for native targets and tests, `crate::local` for the
//! browser).
//!
//! Receivers are `&self`; implementations use interior mutability so a single
//! handle can be shared between the auth store and the route guard.
//!
//! Writes are fallible. A browser may refuse `setItem` (quota exceeded,
//! storage disabled) and callers must not assume a key exists afterwards.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key/value namespace.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}
