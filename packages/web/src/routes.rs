//! The application's route table.
//!
//! Mirrors the [`Route`] enum with access metadata. Each entry's view is a
//! factory for its router target, built only when the guard needs it.

use store::{KeyValueStorage, Navigation, RouteEntry, RouteError, RouteTable, SessionStore};

use crate::Route;

pub(crate) type ViewFn = fn() -> Route;
pub(crate) type AppRoutes = RouteTable<ViewFn>;

fn public(path: &str, name: &str, view: ViewFn) -> RouteEntry<ViewFn> {
    RouteEntry::public(path, name, view)
}

fn protected(path: &str, name: &str, view: ViewFn) -> RouteEntry<ViewFn> {
    RouteEntry::protected(path, name, view)
}

pub(crate) fn route_table(redirect_path: &str) -> Result<AppRoutes, RouteError> {
    RouteTable::with_redirect(
        vec![
            public("/", "Login", || Route::Login {}),
            public("/register", "Register", || Route::Register {}),
            protected("/home", "Home", || Route::Home {}),
            protected("/settings", "Settings", || Route::Settings {}),
        ],
        redirect_path,
    )
}

/// Where the guard sends a navigation to `path`, or `None` to render it.
///
/// Paths outside the table are left to the router's catch-all.
pub(crate) fn guard_redirect<S: KeyValueStorage>(
    table: &AppRoutes,
    path: &str,
    from: Option<&str>,
    session: &SessionStore<S>,
) -> Option<Route> {
    let to = table.resolve(path)?;
    let from = from.and_then(|p| table.resolve(p));
    match table.before_each(to, from, session) {
        Navigation::Proceed => None,
        Navigation::Redirect(target) => {
            let entry = table.resolve(&target);
            if entry.is_none() {
                tracing::error!("Guard redirect target {} is not a route", target);
            }
            entry.map(|entry| (entry.view)())
        }
    }
}

/// Whether a public entry view should send the visitor on to the home page.
///
/// Uses the same token check as the guard, so the two can never bounce a
/// visitor back and forth.
pub(crate) fn skip_entry_view<S: KeyValueStorage>(session: &SessionStore<S>) -> bool {
    session.has_token()
}
