//! # Shell configuration: `shell.toml`
//!
//! Defines the TOML file the web binary embeds at build time
//! (filename: [`ShellConfig::filename`] = `"shell.toml"`). It names the
//! `localStorage` keys that hold the session, the placeholder token written on
//! login, and where the route guard sends unauthenticated visitors.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! token_key = "authToken"
//! user_key = "user"
//!
//! [auth]
//! placeholder_token = "mock-token"
//! redirect_path = "/"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ShellConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`StorageConfig`] | `localStorage` key names shared by the auth store and the guard. |
//! | [`AuthConfig`] | Placeholder token and the guard's redirect target. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent
//! to [`ShellConfig::default`].

use serde::{Deserialize, Serialize};

use crate::session::StorageKeys;

/// Top-level configuration stored in `shell.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Storage key names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_user_key")]
    pub user_key: String,
}

/// Authentication behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token written to storage on login. Never validated or expired.
    #[serde(default = "default_placeholder_token")]
    pub placeholder_token: String,
    /// Where the guard redirects navigation to protected routes without a token.
    #[serde(default = "default_redirect_path")]
    pub redirect_path: String,
}

fn default_token_key() -> String {
    "authToken".to_string()
}

fn default_user_key() -> String {
    "user".to_string()
}

fn default_placeholder_token() -> String {
    "mock-token".to_string()
}

fn default_redirect_path() -> String {
    "/".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            placeholder_token: default_placeholder_token(),
            redirect_path: default_redirect_path(),
        }
    }
}

impl ShellConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "shell.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Storage keys for a [`crate::SessionStore`].
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            token: self.storage.token_key.clone(),
            user: self.storage.user_key.clone(),
        }
    }
}
