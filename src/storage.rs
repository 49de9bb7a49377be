//! Durable session storage.
//!
//! The session is mirrored 1:1 into three `localStorage` keys; absence of
//! the token key means logged out. `is_authenticated` is never persisted —
//! it is derived from the token being present and non-empty, and every
//! transition clears or writes both the in-memory and durable sides
//! together so they cannot drift.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Key holding the signed-in username.
pub const USERNAME_KEY: &str = "username";

/// Key-value storage surviving page reloads.
///
/// `localStorage` in the browser; an in-memory map in tests and host
/// builds. The HTTP adapter reads the token through this seam rather than
/// from the in-memory session, so there is no dependency cycle between the
/// transport layer and the session state.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. All failures (storage disabled, quota)
/// degrade to "key absent" rather than crashing the app.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage for unit tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// The storage backing the live session.
#[cfg(feature = "csr")]
pub fn durable() -> impl SessionStorage {
    BrowserStorage
}

#[cfg(not(feature = "csr"))]
thread_local! {
    static HOST_SESSION: MemoryStorage = MemoryStorage::default();
}

/// Host-build stand-in: one shared in-memory map per thread, so the
/// login/logout/initialize flows persist across `durable()` calls and
/// host tests can observe the durable side of every transition.
#[cfg(not(feature = "csr"))]
pub fn durable() -> impl SessionStorage {
    HOST_SESSION.with(Clone::clone)
}

/// Remove all three session keys.
pub fn clear_session_keys(storage: &impl SessionStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(REFRESH_TOKEN_KEY);
    storage.remove(USERNAME_KEY);
}

/// True when a non-empty token is persisted.
pub fn has_token(storage: &impl SessionStorage) -> bool {
    storage.get(TOKEN_KEY).is_some_and(|t| !t.is_empty())
}
