//! # localStorage token store — browser-side persistence
//!
//! [`LocalTokenStore`] is the [`TokenStore`] used on the **web platform**. It keeps
//! the session token in `window.localStorage` under the configured key
//! (`"authToken"` by default).
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled cookies, sandboxed
//! iframes). Every method degrades quietly: reads return `None` and writes are
//! dropped after a warning, so the app simply behaves as signed out.

use web_sys::Storage;

use crate::session::TokenStore;

/// `localStorage`-backed TokenStore.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        self.storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(&self.key, token).is_err() {
            tracing::warn!("failed to write {} to localStorage", self.key);
        }
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, token not cleared");
            return;
        };
        if storage.remove_item(&self.key).is_err() {
            tracing::warn!("failed to remove {} from localStorage", self.key);
        }
    }
}
