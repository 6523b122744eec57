//! `localStorage` backend.

use crate::error::BrowserError;
use crate::storage::KeyValueStore;

/// `window.localStorage`, or nothing when the page has no storage access
/// (private modes, sandboxed frames). Without storage every read is empty and
/// every write is dropped.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("storage: localStorage unavailable, preferences will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.inner.as_ref() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("storage: {}", BrowserError::js("localStorage.setItem", &e));
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.inner.as_ref() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("storage: {}", BrowserError::js("localStorage.removeItem", &e));
        }
    }
}
