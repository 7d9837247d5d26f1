//! Registration page view with name/email/password form.

use dioxus::prelude::*;
use serde_json::{json, Value};
use ui::use_auth;

use crate::routes::skip_entry_view;
use crate::Route;

/// Check the registration form and build the user record to log in with.
///
/// The password is only compared, never stored.
fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Value, &'static str> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    Ok(json!({ "name": name, "email": email }))
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    if skip_entry_view(auth.read().session()) {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let user = match validate_registration(&name(), &email(), &password(), &confirm_password()) {
            Ok(user) => user,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        let result = auth.write().login(user);
        match result {
            Ok(()) => {
                nav.push(Route::Home {});
            }
            Err(e) => {
                tracing::error!("Registration failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "page",

            h1 { "Create Account" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn",
                    r#type: "submit",
                    "Sign up"
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
