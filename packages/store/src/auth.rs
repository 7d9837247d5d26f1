//! # Auth state store
//!
//! [`AuthStore`] holds the in-memory view of the session (`user` and
//! `is_authenticated`) and mirrors every change into storage through its
//! [`SessionStore`]. One instance is built per application session and passed
//! to whatever owns the view layer; there is no global.
//!
//! | Method | Memory | Storage |
//! |--------|--------|---------|
//! | [`login`](AuthStore::login) | user set, authenticated | token + user written |
//! | [`logout`](AuthStore::logout) | cleared | both keys removed |
//! | [`check_auth`](AuthStore::check_auth) | restored from storage | read only |
//!
//! No user record shape is enforced: any JSON value is accepted on login.

use serde_json::Value;
use thiserror::Error;

use crate::session::{Session, SessionError, SessionStore};
use crate::storage::KeyValueStorage;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// In-memory authentication state backed by a [`SessionStore`].
#[derive(Debug)]
pub struct AuthStore<S> {
    session: SessionStore<S>,
    placeholder_token: String,
    user: Option<Value>,
    is_authenticated: bool,
}

impl<S: KeyValueStorage> AuthStore<S> {
    /// Create a logged-out store. Call [`check_auth`](Self::check_auth) to
    /// restore a persisted session.
    pub fn new(session: SessionStore<S>, placeholder_token: impl Into<String>) -> Self {
        Self {
            session,
            placeholder_token: placeholder_token.into(),
            user: None,
            is_authenticated: false,
        }
    }

    pub fn user(&self) -> Option<&Value> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// The session access shared with the route guard.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Mark `user` as logged in and persist the placeholder token and record.
    ///
    /// The store is marked logged in only after storage accepted both keys.
    /// If storage refuses the write, the half-written session is removed and
    /// the store ends up logged out, matching what the route guard sees.
    pub fn login(&mut self, user: Value) -> Result<(), AuthError> {
        let saved = self.session.save(&Session {
            token: self.placeholder_token.clone(),
            user: user.clone(),
        });
        if let Err(e) = saved {
            self.user = None;
            self.is_authenticated = false;
            tracing::warn!("Login not persisted: {}", e);
            return Err(e.into());
        }
        self.user = Some(user);
        self.is_authenticated = true;
        tracing::info!("User logged in");
        Ok(())
    }

    /// Clear memory and storage. Calling it while logged out is a no-op.
    pub fn logout(&mut self) {
        if self.is_authenticated {
            tracing::info!("User logged out");
        }
        self.user = None;
        self.is_authenticated = false;
        self.session.clear();
    }

    /// Restore the session from storage.
    ///
    /// Returns whether the store is authenticated afterwards. When storage
    /// holds no complete session the in-memory state is left as it was. A
    /// corrupted user record resets the store to logged out and is returned
    /// as an error for the caller to report.
    pub fn check_auth(&mut self) -> Result<bool, AuthError> {
        match self.session.load() {
            Ok(Some(session)) => {
                self.user = Some(session.user);
                self.is_authenticated = true;
                tracing::debug!("Session restored from storage");
            }
            Ok(None) => {}
            Err(e) => {
                self.user = None;
                self.is_authenticated = false;
                return Err(e.into());
            }
        }
        Ok(self.is_authenticated)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::memory::MemoryStorage;
    use crate::storage::KeyValueStorage;

    fn auth_store() -> (MemoryStorage, AuthStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let store = AuthStore::new(SessionStore::new(storage.clone()), "mock-token");
        (storage, store)
    }

    #[test]
    fn test_new_store_is_logged_out() {
        let (_, store) = auth_store();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_login_writes_storage() {
        let (storage, mut store) = auth_store();
        store.login(json!({"id": 1, "name": "a"})).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.user(), Some(&json!({"id": 1, "name": "a"})));
        assert_eq!(storage.get("authToken").as_deref(), Some("mock-token"));
        assert_eq!(storage.get("user").as_deref(), Some(r#"{"id":1,"name":"a"}"#));
    }

    #[test]
    fn test_login_then_check_auth_round_trips_user() {
        let (storage, mut store) = auth_store();
        let user = json!({"id": 7, "name": "b", "tags": ["x", "y"], "nested": {"ok": true}});
        store.login(user.clone()).unwrap();

        // A fresh store over the same storage stands in for an app restart.
        let mut restarted = AuthStore::new(SessionStore::new(storage), "mock-token");
        assert!(restarted.check_auth().unwrap());
        assert!(restarted.is_authenticated());
        assert_eq!(restarted.user(), Some(&user));
    }

    #[test]
    fn test_login_accepts_any_value() {
        let (_, mut store) = auth_store();
        store.login(json!("just a string")).unwrap();
        assert!(store.check_auth().unwrap());
        assert_eq!(store.user(), Some(&json!("just a string")));
    }

    #[test]
    fn test_logout_then_check_auth_is_logged_out() {
        let (storage, mut store) = auth_store();
        store.login(json!({"id": 1})).unwrap();
        store.logout();

        assert!(!store.check_auth().unwrap());
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let (storage, mut store) = auth_store();
        store.login(json!({"id": 1})).unwrap();

        store.logout();
        let once = (store.is_authenticated(), store.user().cloned(), storage.len());
        store.logout();
        let twice = (store.is_authenticated(), store.user().cloned(), storage.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_logout_when_never_logged_in() {
        let (storage, mut store) = auth_store();
        store.logout();
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_check_auth_with_empty_storage_keeps_state() {
        let (_, mut store) = auth_store();
        assert!(!store.check_auth().unwrap());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_check_auth_with_corrupted_user() {
        let (storage, mut store) = auth_store();
        storage.set("authToken", "mock-token").unwrap();
        storage.set("user", "{\"id\": 1,").unwrap();

        let err = store.check_auth().unwrap_err();
        assert!(matches!(
            err,
            AuthError::Session(SessionError::DataCorruption(_))
        ));
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_check_auth_with_corrupted_user_resets_previous_login() {
        let (storage, mut store) = auth_store();
        store.login(json!({"id": 1})).unwrap();
        storage.set("user", "garbage").unwrap();

        assert!(store.check_auth().is_err());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_refused_by_storage_stays_logged_out() {
        let storage = MemoryStorage::with_quota(0);
        let mut store = AuthStore::new(SessionStore::new(storage.clone()), "mock-token");

        let err = store.login(json!({"id": 1})).unwrap_err();
        assert!(matches!(err, AuthError::Session(SessionError::Storage(_))));
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(!store.session().has_token());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_custom_placeholder_token() {
        let storage = MemoryStorage::new();
        let mut store = AuthStore::new(SessionStore::new(storage.clone()), "dev-token");
        store.login(json!({})).unwrap();
        assert_eq!(storage.get("authToken").as_deref(), Some("dev-token"));
        assert_eq!(store.session().token().as_deref(), Some("dev-token"));
    }
}
