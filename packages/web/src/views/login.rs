//! Login page view.

use dioxus::prelude::*;
use serde_json::json;
use ui::{use_auth, LoginButton};

use crate::routes::skip_entry_view;
use crate::Route;

/// Login page component.
///
/// Credentials are not checked; any non-empty name logs in.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    // If already logged in, go straight home
    if skip_entry_view(auth.read().session()) {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let user = json!({
        "name": name().trim(),
        "email": email().trim(),
    });

    rsx! {
        div {
            class: "page",

            h1 { "Sign in" }

            form {
                class: "auth-form",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),

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

                LoginButton {
                    user,
                    label: "Sign in",
                    class: "btn",
                    disabled: name().trim().is_empty(),
                    on_login: move |_| {
                        nav.push(Route::Home {});
                    },
                }
            }

            p {
                "No account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
