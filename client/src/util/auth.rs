//! Route guard for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any page under `/app` applies the same redirect: no session token in
//! storage means straight to the login route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use catalog::consts::POST_LOGOUT_ROUTE;
use catalog::session::has_session;
use catalog::storage::PreferenceStore;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::storage::BrowserStorage;

/// Where an unauthenticated visitor is sent, or `None` if a session exists.
pub fn login_redirect(store: &impl PreferenceStore) -> Option<&'static str> {
    (!has_session(store)).then_some(POST_LOGOUT_ROUTE)
}

/// Redirect to the login route once hydrated if no session token is stored.
pub fn install_session_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(route) = login_redirect(&BrowserStorage) {
            navigate(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
