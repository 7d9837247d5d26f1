//! # Session access: the only reader and writer of the session keys
//!
//! A [`Session`] is a token plus an arbitrary JSON user record. It lives in two
//! storage keys (by default `authToken` and `user`, see [`StorageKeys`]):
//!
//! | Key | Value | Present |
//! |-----|-------|---------|
//! | `authToken` | opaque token string | iff logged in |
//! | `user` | JSON-serialised user record | iff logged in |
//!
//! [`SessionStore`] wraps a [`KeyValueStorage`] and is shared by the auth store
//! ([`crate::auth`]) and the route guard ([`crate::routes`]), so the two can
//! never disagree about which keys mean "logged in".
//!
//! An empty string in either key counts as absent. Any other token is accepted
//! as-is; tokens are placeholders and are never validated or expired.

use serde_json::Value;
use thiserror::Error;

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key names for the two halves of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token: "authToken".to_string(),
            user: "user".to_string(),
        }
    }
}

/// An authenticated user's token and profile record.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Value,
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// The stored user record is not valid JSON.
    #[error("stored session data is corrupted: {0}")]
    DataCorruption(#[source] serde_json::Error),
    /// Storage refused a write; nothing of the session was kept.
    #[error("failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

/// Typed access to the session keys of a [`KeyValueStorage`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Create a session store using the default key names.
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, StorageKeys::default())
    }

    pub fn with_keys(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    /// The stored token, if present and non-empty.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(&self.keys.token)
            .filter(|token| !token.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Reconstruct the session from storage.
    ///
    /// Returns `Ok(None)` unless both keys hold non-empty values. A user
    /// record that fails to parse is reported as
    /// [`SessionError::DataCorruption`]; storage is left untouched.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let Some(token) = self.token() else {
            return Ok(None);
        };
        let Some(raw) = self
            .storage
            .get(&self.keys.user)
            .filter(|raw| !raw.is_empty())
        else {
            return Ok(None);
        };

        let user = serde_json::from_str(&raw).map_err(SessionError::DataCorruption)?;
        Ok(Some(Session { token, user }))
    }

    /// Write both keys, or neither.
    ///
    /// The user record goes first and the token last, so the token (the key
    /// the route guard checks) only appears once the whole session is stored.
    /// On any failure both keys are removed.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let result = self
            .storage
            .set(&self.keys.user, &session.user.to_string())
            .and_then(|()| self.storage.set(&self.keys.token, &session.token));
        if let Err(e) = result {
            self.clear();
            return Err(e.into());
        }
        Ok(())
    }

    /// Remove both keys. Safe to call when nothing is stored.
    pub fn clear(&self) {
        self.storage.remove(&self.keys.token);
        self.storage.remove(&self.keys.user);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::memory::MemoryStorage;

    fn session_store() -> (MemoryStorage, SessionStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        (storage.clone(), SessionStore::new(storage))
    }

    #[test]
    fn test_empty_storage_has_no_session() {
        let (_, sessions) = session_store();
        assert!(!sessions.has_token());
        assert!(sessions.load().unwrap().is_none());
    }

    #[test]
    fn test_save_writes_both_keys() {
        let (storage, sessions) = session_store();
        sessions
            .save(&Session {
                token: "mock-token".to_string(),
                user: json!({"id": 1, "name": "a"}),
            })
            .unwrap();

        assert_eq!(storage.get("authToken").as_deref(), Some("mock-token"));
        assert_eq!(storage.get("user").as_deref(), Some(r#"{"id":1,"name":"a"}"#));
    }

    #[test]
    fn test_load_returns_saved_session() {
        let (_, sessions) = session_store();
        let session = Session {
            token: "t".to_string(),
            user: json!({"name": "a", "roles": ["admin"]}),
        };
        sessions.save(&session).unwrap();
        assert_eq!(sessions.load().unwrap(), Some(session));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let (storage, sessions) = session_store();
        storage.set("authToken", "").unwrap();
        storage.set("user", "{}").unwrap();
        assert!(sessions.token().is_none());
        assert!(sessions.load().unwrap().is_none());
    }

    #[test]
    fn test_token_without_user_is_no_session() {
        let (storage, sessions) = session_store();
        storage.set("authToken", "mock-token").unwrap();
        assert!(sessions.has_token());
        assert!(sessions.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_user_is_data_corruption() {
        let (storage, sessions) = session_store();
        storage.set("authToken", "mock-token").unwrap();
        storage.set("user", "{not json").unwrap();

        let err = sessions.load().unwrap_err();
        assert!(matches!(err, SessionError::DataCorruption(_)));
        // Corrupted data is reported, not deleted.
        assert_eq!(storage.get("user").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_save_refused_by_storage_keeps_nothing() {
        let storage = MemoryStorage::with_quota(0);
        let sessions = SessionStore::new(storage.clone());

        let err = sessions
            .save(&Session {
                token: "mock-token".to_string(),
                user: json!({"id": 1}),
            })
            .unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        assert!(!sessions.has_token());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_save_half_written_is_rolled_back() {
        // Room for the user record but not the token.
        let storage = MemoryStorage::with_quota(1);
        let sessions = SessionStore::new(storage.clone());

        let err = sessions
            .save(&Session {
                token: "mock-token".to_string(),
                user: json!({"id": 1}),
            })
            .unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        assert!(storage.get("user").is_none());
        assert!(sessions.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (storage, sessions) = session_store();
        sessions
            .save(&Session {
                token: "t".to_string(),
                user: Value::Null,
            })
            .unwrap();

        sessions.clear();
        assert!(storage.is_empty());
        sessions.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_custom_keys() {
        let storage = MemoryStorage::new();
        let sessions = SessionStore::with_keys(
            storage.clone(),
            StorageKeys {
                token: "tok".to_string(),
                user: "profile".to_string(),
            },
        );
        sessions
            .save(&Session {
                token: "x".to_string(),
                user: json!("plain"),
            })
            .unwrap();

        assert_eq!(storage.get("tok").as_deref(), Some("x"));
        assert_eq!(storage.get("profile").as_deref(), Some("\"plain\""));
        assert!(storage.get("authToken").is_none());
    }
}
