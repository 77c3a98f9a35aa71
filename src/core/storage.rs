//! Persisted key-value entries for the session

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Session token returned by `user/create`
pub const USER_TOKEN: &str = "userToken";
/// Backend id of the registered user
pub const USER_ID: &str = "userID";
/// First name, used for greetings
pub const USER_FIRST_NAME: &str = "userFirstName";

/// Every key written by the session
pub const SESSION_KEYS: [&str; 3] = [USER_TOKEN, USER_ID, USER_FIRST_NAME];

/// Minimal string key-value storage, shaped after the browser's `localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// In-memory store used on the server and in tests.
///
/// Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or("No window available")?;
        window
            .local_storage()
            .map_err(|_| "Failed to get localStorage")?
            .ok_or_else(|| "localStorage not available".to_string())
    }
}

#[cfg(not(feature = "ssr"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to set {}", key))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

/// SSR stub - there is no localStorage on the server
#[cfg(feature = "ssr")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}
