//! Session lifecycle: token bookkeeping and the sign-out sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is initialized once when the login page stores a token and is
//! torn down only by [`sign_out`]. Sign-out never strands the user: storage
//! failures are logged and navigation still happens.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::cell::StateCell;
use crate::consts::{POST_LOGOUT_ROUTE, SESSION_KEYS, SESSION_TOKEN_KEY};
use crate::error::StorageError;
use crate::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    /// Terminal; left only by navigating away.
    SigningOut,
}

impl SessionState {
    #[must_use]
    pub fn is_signing_out(self) -> bool {
        self == Self::SigningOut
    }
}

/// Whether a session token is present.
pub fn has_session(store: &impl PreferenceStore) -> bool {
    match store.get(SESSION_TOKEN_KEY) {
        Ok(token) => token.is_some_and(|t| !t.is_empty()),
        Err(e) => {
            log::warn!("session storage unreadable: {e}");
            false
        }
    }
}

/// Persist the token issued by the authentication service.
///
/// # Errors
///
/// Returns [`StorageError`] when the token cannot be written; the caller
/// should treat the login as failed.
pub fn store_token(store: &impl PreferenceStore, token: &str) -> Result<(), StorageError> {
    store.set(SESSION_TOKEN_KEY, token)
}

/// Remove every session-scoped key. Returns how many removals failed.
pub fn clear_session(store: &impl PreferenceStore) -> usize {
    SESSION_KEYS
        .iter()
        .filter(|key| match store.remove(key) {
            Ok(()) => false,
            Err(e) => {
                log::error!("failed to clear session key {key:?}: {e}");
                true
            }
        })
        .count()
}

/// Run the sign-out sequence.
///
/// Moves `state` to [`SessionState::SigningOut`], clears session storage,
/// waits for `delay` so the pending state is visible, then hands
/// [`POST_LOGOUT_ROUTE`] to `navigate`. A call while already signing out is
/// ignored and returns `false`.
pub async fn sign_out<C, P, D, N>(state: &C, store: &P, delay: D, navigate: N) -> bool
where
    C: StateCell<SessionState>,
    P: PreferenceStore,
    D: Future<Output = ()>,
    N: FnOnce(&str),
{
    let started = state
        .write(|s| {
            if s.is_signing_out() {
                false
            } else {
                *s = SessionState::SigningOut;
                true
            }
        })
        .unwrap_or(false);
    if !started {
        return false;
    }

    let failures = clear_session(store);
    if failures > 0 {
        log::warn!("sign-out continuing after {failures} storage failure(s)");
    }

    delay.await;
    navigate(POST_LOGOUT_ROUTE);
    true
}
