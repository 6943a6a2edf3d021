//! Browser localStorage backend — web platform.
//!
//! All operations silently degrade when localStorage is unavailable
//! (private browsing, storage disabled): reads return `None` and writes do
//! nothing, so the session simply starts unauthenticated.

use web_sys::Storage;

use crate::storage::SessionStorage;

/// SessionStorage backed by `window.localStorage`.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}
