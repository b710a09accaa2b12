use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::consts::{SESSION_USER_KEY, THEME_KEY};
use crate::storage::MemoryStore;
use crate::testing::BrokenStore;

#[test]
fn session_state_defaults_to_idle() {
    assert_eq!(SessionState::default(), SessionState::Idle);
    assert!(!SessionState::Idle.is_signing_out());
}

#[test]
fn store_token_then_has_session() {
    let store = MemoryStore::new();
    assert!(!has_session(&store));
    store_token(&store, "jwt-abc").unwrap();
    assert!(has_session(&store));
}

#[test]
fn empty_token_is_not_a_session() {
    let store = MemoryStore::new();
    store_token(&store, "").unwrap();
    assert!(!has_session(&store));
}

#[test]
fn unreadable_storage_is_not_a_session() {
    assert!(!has_session(&BrokenStore::unreadable()));
}

#[test]
fn sign_out_clears_session_keys_keeps_theme_and_navigates() {
    let store = MemoryStore::new();
    store.set(SESSION_TOKEN_KEY, "jwt").unwrap();
    store.set(SESSION_USER_KEY, "{\"name\":\"John\"}").unwrap();
    store.set(THEME_KEY, "dark").unwrap();
    let state = RefCell::new(SessionState::Idle);
    let mut target = None;

    let ran = block_on(sign_out(&state, &store, async {}, |route: &str| target = Some(route.to_owned())));

    assert!(ran);
    assert_eq!(*state.borrow(), SessionState::SigningOut);
    assert_eq!(target.as_deref(), Some(POST_LOGOUT_ROUTE));
    assert_eq!(store.get(SESSION_TOKEN_KEY), Ok(None));
    assert_eq!(store.get(SESSION_USER_KEY), Ok(None));
    assert_eq!(store.get(THEME_KEY), Ok(Some("dark".to_owned())));
}

#[test]
fn sign_out_navigates_even_when_clearing_fails() {
    let store = BrokenStore::read_only();
    let state = RefCell::new(SessionState::Idle);
    let mut target = None;

    let ran = block_on(sign_out(&state, &store, async {}, |route: &str| target = Some(route.to_owned())));

    assert!(ran);
    assert_eq!(target.as_deref(), Some(POST_LOGOUT_ROUTE));
    assert_eq!(clear_session(&store), SESSION_KEYS.len());
}

#[test]
fn navigation_happens_after_the_delay() {
    let store = MemoryStore::new();
    let state = RefCell::new(SessionState::Idle);
    let order = RefCell::new(Vec::new());

    block_on(sign_out(
        &state,
        &store,
        async {
            assert_eq!(*state.borrow(), SessionState::SigningOut);
            order.borrow_mut().push("delay");
        },
        |_route: &str| order.borrow_mut().push("navigate"),
    ));

    assert_eq!(*order.borrow(), ["delay", "navigate"]);
}

#[test]
fn second_sign_out_while_pending_is_ignored() {
    let store = MemoryStore::new();
    let state = RefCell::new(SessionState::SigningOut);
    let mut navigated = false;

    let ran = block_on(sign_out(&state, &store, async {}, |_route: &str| navigated = true));

    assert!(!ran);
    assert!(!navigated);
    assert_eq!(*state.borrow(), SessionState::SigningOut);
}
