use dioxus::prelude::*;

use store::ShellConfig;
use ui::AuthProvider;
use views::{AuthGuard, Home, Login, NotFound, Register, Settings};

mod routes;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AuthGuard)]
        #[route("/")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/home")]
        Home {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SHELL_TOML: &str = include_str!("../shell.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(App);
}

/// Parse the embedded `shell.toml`, falling back to defaults.
fn load_config() -> ShellConfig {
    ShellConfig::from_toml(SHELL_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", ShellConfig::filename(), e);
        ShellConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let redirect_path = config.auth.redirect_path.clone();
    use_context_provider(move || {
        routes::route_table(&redirect_path).expect("Route table must be valid")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}
