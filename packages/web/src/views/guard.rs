//! Layout that runs the navigation guard before rendering a route.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use ui::use_auth;

use crate::routes::{guard_redirect, AppRoutes};
use crate::Route;

/// Checks every transition against the route table.
///
/// Protected routes without a stored token are replaced by the table's
/// redirect target. Reading the auth signal re-runs the guard on logout, so a
/// protected page is left as soon as the token disappears.
#[component]
pub fn AuthGuard() -> Element {
    let route = use_route::<Route>();
    let table = use_context::<AppRoutes>();
    let auth = use_auth();
    let nav = use_navigator();
    let previous = use_hook(|| Rc::new(RefCell::new(Option::<String>::None)));

    let path = route.to_string();
    let from = previous.borrow().clone();
    let redirect = guard_redirect(&table, &path, from.as_deref(), auth.read().session());

    match redirect {
        None => {
            *previous.borrow_mut() = Some(path);
            rsx! { Outlet::<Route> {} }
        }
        Some(target) => {
            nav.replace(target);
            rsx! {}
        }
    }
}
