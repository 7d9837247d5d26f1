//! Account settings page.

use dioxus::prelude::*;
use ui::{LogoutButton, Navbar, UserCard};

use crate::Route;

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Settings {}, "Settings" }
        }
        div {
            class: "page",
            h1 { "Settings" }
            h2 { "Account" }
            UserCard { show_record: true }
            LogoutButton {
                label: "Log out of this browser",
                class: "btn btn-secondary",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
