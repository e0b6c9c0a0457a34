use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::window;

/// Key of the access token
pub const TOKEN_KEY: &str = "token";
/// `"true"` when the operator ticked "Remember me", absent otherwise
pub const REMEMBER_KEY: &str = "remember";

/// Persistence of the session. Only [`TOKEN_KEY`] and [`REMEMBER_KEY`] are
/// ever written.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.items.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
