//! Persistence of the bearer token between page loads or CLI invocations.

use std::cell::RefCell;
use std::rc::Rc;

/// Default key of the persistent slot holding the token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// A single persistent slot for the session token.
///
/// Implementations swallow storage failures after logging them; the
/// in-memory session carries on regardless. No expiry is tracked here.
pub trait SessionStore {
    /// Reads the stored token, if any.
    fn get_token(&self) -> Option<String>;

    /// Replaces the stored token.
    fn set_token(&self, token: &str);

    /// Removes the stored token.
    fn clear_token(&self);
}

/// Process-local store; clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated as if a previous session had saved `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set_token(token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get_token(), None);

        store.set_token("abc");
        assert_eq!(store.get_token().as_deref(), Some("abc"));

        store.clear_token();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemorySessionStore::with_token("abc");
        let observer = store.clone();

        store.clear_token();
        assert_eq!(observer.get_token(), None);
    }
}
