use dioxus::prelude::*;

use crate::routes::AppRoutes;
use crate::Route;

/// Unknown paths go to the same entry view the guard redirects to.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let table = use_context::<AppRoutes>();
    let nav = use_navigator();
    tracing::debug!("No route for /{}, redirecting", segments.join("/"));

    let target = table
        .resolve(table.redirect_path())
        .map_or(Route::Login {}, |entry| (entry.view)());
    nav.replace(target);
    rsx! {}
}
