//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use serde_json::Value;
use store::{AuthStore, SessionStore, ShellConfig};

use crate::storage::{make_storage, AppStorage};

/// The auth store as provided through context.
pub type AppAuthStore = AuthStore<AppStorage>;

/// Get the shared authentication store.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AppAuthStore> {
    use_context::<Signal<AppAuthStore>>()
}

/// Provider component that owns the authentication store.
///
/// The store is built once, restored from storage on mount, and shared with
/// every descendant through [`use_auth`].
#[component]
pub fn AuthProvider(config: ShellConfig, children: Element) -> Element {
    let auth_store = use_signal(|| {
        let session = SessionStore::with_keys(make_storage(), config.storage_keys());
        let mut auth = AuthStore::new(session, config.auth.placeholder_token.clone());
        match auth.check_auth() {
            Ok(true) => tracing::info!("Restored stored session"),
            Ok(false) => {}
            // A corrupted record means logged out; the views never see the error.
            Err(e) => tracing::warn!("Ignoring stored session: {}", e),
        }
        auth
    });

    use_context_provider(|| auth_store);

    rsx! {
        {children}
    }
}

/// Button that logs `user` in and then calls `on_login`.
#[component]
pub fn LoginButton(
    user: Value,
    on_login: EventHandler<()>,
    #[props(default = "Login".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] disabled: bool,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        let result = auth.write().login(user.clone());
        match result {
            Ok(()) => on_login.call(()),
            Err(e) => tracing::error!("Failed to log in: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            onclick: onclick,
            "{label}"
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        auth.write().logout();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
