use catalog::consts::SESSION_TOKEN_KEY;
use catalog::session::store_token;
use catalog::storage::MemoryStore;

use super::*;

#[test]
fn redirects_to_login_without_a_token() {
    let store = MemoryStore::new();
    assert_eq!(login_redirect(&store), Some("/login"));
}

#[test]
fn stays_put_with_a_stored_token() {
    let store = MemoryStore::new();
    store_token(&store, "abc123").unwrap();
    assert_eq!(login_redirect(&store), None);
}

#[test]
fn blank_token_counts_as_signed_out() {
    let store = MemoryStore::new();
    store.set(SESSION_TOKEN_KEY, "").unwrap();
    assert_eq!(login_redirect(&store), Some("/login"));
}
