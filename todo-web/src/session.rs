//! Browser `localStorage` backing for the session token.

use gloo_storage::{LocalStorage, Storage};
use shared::session::SessionStore;

/// Stores the bearer token under one `localStorage` key.
#[derive(Debug, Clone)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl SessionStore for LocalStorageSession {
    fn get_token(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) {
        if let Err(err) = LocalStorage::raw().set_item(&self.key, token) {
            web_sys::console::warn_2(&"Failed to persist session token".into(), &err);
        }
    }

    fn clear_token(&self) {
        LocalStorage::delete(&self.key);
    }
}
