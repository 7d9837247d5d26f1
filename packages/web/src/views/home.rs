use dioxus::prelude::*;
use ui::{LogoutButton, Navbar, UserCard};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Settings {}, "Settings" }
            LogoutButton {
                class: "btn btn-secondary",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
        div {
            class: "page",
            h1 { "Welcome" }
            UserCard {}
        }
    }
}
