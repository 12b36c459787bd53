use base64::Engine;

use super::*;
use crate::util::storage::{KeyValueStorage, MemoryStorage};

fn valid_token(is_admin: bool) -> String {
    let payload = serde_json::json!({
        "user": { "id": "u1", "nombre": "Ana", "email": "ana@uni.edu", "isAdmin": is_admin }
    });
    let body = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&payload).unwrap());
    format!("h.{body}.s")
}

fn store_over(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    SessionStore::new(storage.clone())
}

// =============================================================
// Defaults and rehydration
// =============================================================

#[test]
fn new_store_is_loading_and_unauthenticated() {
    let state = store_over(&MemoryStorage::default()).get_untracked();
    assert!(state.loading);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn rehydrate_without_token_is_logged_out() {
    let store = store_over(&MemoryStorage::default());
    store.rehydrate();
    let state = store.get_untracked();
    assert!(!state.loading);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn rehydrate_with_valid_token_populates_profile() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, &valid_token(false));
    let store = store_over(&storage);
    store.rehydrate();
    let state = store.get_untracked();
    assert!(!state.loading);
    assert!(state.is_authenticated);
    assert_eq!(state.user.unwrap().nombre, "Ana");
}

#[test]
fn rehydrate_with_undecodable_token_still_authenticates() {
    // Token presence drives authentication; decode only fills the profile.
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "garbage-token");
    let store = store_over(&storage);
    store.rehydrate();
    let state = store.get_untracked();
    assert!(state.is_authenticated);
    assert!(state.user.is_none());
    assert!(!state.loading);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_persists_token_and_sets_profile() {
    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.rehydrate();
    store.login(&valid_token(true));

    let state = store.get_untracked();
    assert!(state.is_authenticated);
    assert!(state.is_admin());
    assert_eq!(storage.get(TOKEN_KEY), Some(valid_token(true)));
}

#[test]
fn login_with_undecodable_token_leaves_profile_unset() {
    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.rehydrate();
    store.login("not.a-real.token");

    let state = store.get_untracked();
    assert!(state.is_authenticated);
    assert!(state.user.is_none());
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("not.a-real.token"));
}

#[test]
fn login_survives_reload() {
    let storage = MemoryStorage::default();
    store_over(&storage).login(&valid_token(false));

    // A fresh store over the same storage simulates a page reload.
    let fresh = store_over(&storage);
    fresh.rehydrate();
    let state = fresh.get_untracked();
    assert!(state.is_authenticated);
    assert_eq!(state.user.unwrap().id, "u1");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_resets_session() {
    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.rehydrate();
    store.login(&valid_token(false));
    store.logout();

    let state = store.get_untracked();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn logout_survives_reload() {
    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.login(&valid_token(false));
    store.logout();

    let fresh = store_over(&storage);
    fresh.rehydrate();
    assert!(!fresh.get_untracked().is_authenticated);
}

// =============================================================
// is_admin
// =============================================================

#[test]
fn is_admin_requires_decoded_profile() {
    let state = SessionState::default();
    assert!(!state.is_admin());

    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.login(&valid_token(true));
    assert!(store.get_untracked().is_admin());
}
