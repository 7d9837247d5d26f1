//! # Route table and navigation guard
//!
//! A [`RouteTable`] is an ordered, immutable list of [`RouteEntry`] values
//! built once at startup. Each entry maps a unique path to a name, an access
//! flag, and a deferred view handle `V` (typically a factory function that
//! produces the view or the router target only when it is needed).
//!
//! [`RouteTable::before_each`] is the guard evaluated before a transition is
//! committed:
//!
//! - target has `requires_auth` and the [`SessionStore`] holds no token →
//!   [`Navigation::Redirect`] to the table's redirect path (default `/`);
//! - anything else → [`Navigation::Proceed`].
//!
//! Token presence is the only check. A stale or forged token passes.

use std::collections::HashSet;

use thiserror::Error;

use crate::session::SessionStore;
use crate::storage::KeyValueStorage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("redirect path {0} is not a route")]
    UnknownRedirect(String),
    #[error("redirect path {0} requires authentication")]
    ProtectedRedirect(String),
}

/// One path-to-view mapping with its access metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEntry<V> {
    pub path: String,
    pub name: String,
    pub requires_auth: bool,
    pub view: V,
}

impl<V> RouteEntry<V> {
    pub fn public(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            requires_auth: false,
            view,
        }
    }

    pub fn protected(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(path, name, view)
        }
    }
}

/// Outcome of the navigation guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(String),
}

/// Ordered set of routes with unique paths.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    redirect_path: String,
}

impl<V> RouteTable<V> {
    /// Build a table that redirects unauthenticated visitors to `/`.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, RouteError> {
        Self::with_redirect(entries, "/")
    }

    /// Build a table with an explicit redirect target.
    ///
    /// The target must be one of the entries and must not require
    /// authentication, otherwise every guarded navigation would loop.
    pub fn with_redirect(
        entries: Vec<RouteEntry<V>>,
        redirect_path: impl Into<String>,
    ) -> Result<Self, RouteError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
        }

        let redirect_path = redirect_path.into();
        match entries.iter().find(|entry| entry.path == redirect_path) {
            None => return Err(RouteError::UnknownRedirect(redirect_path)),
            Some(entry) if entry.requires_auth => {
                return Err(RouteError::ProtectedRedirect(redirect_path));
            }
            Some(_) => {}
        }

        Ok(Self {
            entries,
            redirect_path,
        })
    }

    pub fn redirect_path(&self) -> &str {
        &self.redirect_path
    }

    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decide whether the transition `from -> to` may complete.
    pub fn before_each<S: KeyValueStorage>(
        &self,
        to: &RouteEntry<V>,
        from: Option<&RouteEntry<V>>,
        session: &SessionStore<S>,
    ) -> Navigation {
        let from = from.map_or("<none>", |entry| entry.path.as_str());
        if to.requires_auth && !session.has_token() {
            tracing::debug!(
                "Redirecting {} -> {} to {}: no token",
                from,
                to.path,
                self.redirect_path
            );
            return Navigation::Redirect(self.redirect_path.clone());
        }
        tracing::debug!("Navigating {} -> {}", from, to.path);
        Navigation::Proceed
    }
}
