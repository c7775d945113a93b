//! # Session persistence on an abstract key-value store
//!
//! [`SessionStore`] is the single place that knows how a [`Session`] is laid out
//! in client storage. All reads and writes go through the [`KeyValueStore`] trait,
//! so the same logic works against browser `localStorage` ([`crate::LocalStore`]),
//! the filesystem ([`crate::FileStore`]) or memory ([`crate::MemoryStore`]).
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the raw bearer token |
//! | [`USER_KEY`] (`"user"`) | the whole [`Session`] as JSON, token included |
//!
//! The `user` entry is the source of truth on reload. The separate `token`
//! entry exists for callers that only need the bearer string, and is always
//! written and cleared together with `user`.
//!
//! ## Failure handling
//!
//! Backends swallow their own I/O errors. A `user` entry that no longer parses
//! is logged and treated as absent, which leaves the app anonymous instead of
//! failing to start.

use crate::models::Session;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized session.
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage.
///
/// Mirrors the browser `Storage` API: reads return `None` when the key is
/// missing or the backend is unavailable, and writes never fail loudly.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Reads and writes the persisted [`Session`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore the persisted session, if any.
    pub fn load(&self) -> Option<Session> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored session: {}", e);
                None
            }
        }
    }

    /// Persist a session, overwriting any previous one.
    pub fn save(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(json) => {
                self.store.set(TOKEN_KEY, &session.token);
                self.store.set(USER_KEY, &json);
            }
            Err(e) => tracing::error!("Failed to serialize session: {}", e),
        }
    }

    /// Remove both the session and the raw token.
    pub fn clear(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
    }

    /// The raw bearer token, if one is stored.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Access the underlying store.
    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;

    fn employer() -> Session {
        Session {
            id: "7".to_string(),
            email: "hr@acme.test".to_string(),
            username: "Acme HR".to_string(),
            role: Role::Employer,
            token: "aaa.bbb.ccc".to_string(),
        }
    }

    #[test]
    fn test_load_without_stored_session_is_anonymous() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load().is_none());
        assert!(sessions.token().is_none());
    }

    #[test]
    fn test_save_writes_token_and_user() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save(&employer());

        assert_eq!(sessions.token().as_deref(), Some("aaa.bbb.ccc"));
        let raw = sessions.inner().get(USER_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["role"], "employer");
        assert_eq!(sessions.load(), Some(employer()));
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save(&employer());
        sessions.clear();

        assert!(sessions.inner().get(USER_KEY).is_none());
        assert!(sessions.inner().get(TOKEN_KEY).is_none());
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_corrupt_user_entry_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "{not json");
        let sessions = SessionStore::new(store);
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_stored_session_survives_a_new_store_handle() {
        let store = MemoryStore::new();
        SessionStore::new(store.clone()).save(&employer());

        // Same backing map, fresh handle: the reload case.
        let reopened = SessionStore::new(store);
        assert_eq!(reopened.load().map(|s| s.role), Some(Role::Employer));
    }

    #[test]
    fn test_shared_backend_behind_rc() {
        let store = MemoryStore::new();
        let backend: std::rc::Rc<dyn KeyValueStore> = std::rc::Rc::new(store.clone());
        SessionStore::new(backend).save(&employer());

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("aaa.bbb.ccc"));
        assert!(store.get(USER_KEY).is_some());
    }
}
