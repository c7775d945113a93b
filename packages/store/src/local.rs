//! # localStorage key-value store
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through `web-sys`.
//!
//! ## Connection management
//!
//! `LocalStore` is a zero-size struct that looks up `window.localStorage` on
//! every operation. `web_sys::Storage` is not `Send`, and the lookup is cheap.
//!
//! ## Error handling
//!
//! All trait methods swallow errors (returning `None` for reads, doing nothing
//! for writes). Storage can be disabled (private browsing, quota exceeded);
//! the app then comes back anonymous after a reload.

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("localStorage rejected write to {}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable, {} not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
