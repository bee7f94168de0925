//! Browser storage tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use rota_core::{KeyValueStorage, Role, Session, SessionStore, StorageKeys};
use rota_core::GuardDecision;
use rota_frontend::browser::BrowserStorage;
use rota_frontend::session::decision_for;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn store() -> SessionStore<BrowserStorage> {
    let store = SessionStore::new(BrowserStorage, StorageKeys::default());
    store.clear().unwrap();
    store
}

#[wasm_bindgen_test]
fn session_round_trips_through_local_storage() {
    let store = store();
    store.save(&Session::new("tok", Role::Admin)).unwrap();

    assert_eq!(BrowserStorage.get("token").unwrap().as_deref(), Some("tok"));
    assert_eq!(BrowserStorage.get("userType").unwrap().as_deref(), Some("admin"));
    assert_eq!(store.load(), Some(Session::new("tok", Role::Admin)));

    store.clear().unwrap();
}

#[wasm_bindgen_test]
fn values_are_stored_as_plain_strings() {
    let store = store();
    BrowserStorage.set("token", "abc").unwrap();
    BrowserStorage.set("userType", "staff").unwrap();

    let raw = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item("token")
        .unwrap();
    assert_eq!(raw.as_deref(), Some("abc"));
    assert_eq!(store.load(), Some(Session::new("abc", Role::Staff)));

    store.clear().unwrap();
}

#[wasm_bindgen_test]
fn cleared_storage_has_no_session() {
    let store = store();
    assert_eq!(store.load(), None);
}

#[wasm_bindgen_test]
fn decision_follows_the_route_for_one_session() {
    let store = store();
    store.save(&Session::new("tok", Role::Admin)).unwrap();

    assert_eq!(decision_for("/admin/dashboard"), GuardDecision::Allow);
    assert_eq!(
        decision_for("/staff/dashboard"),
        GuardDecision::Redirect("/".to_string())
    );

    store.clear().unwrap();
    assert_eq!(
        decision_for("/admin/dashboard"),
        GuardDecision::Redirect("/".to_string())
    );
}
