//! Session context and hooks for the UI.
//!
//! The session is the only state shared across pages. [`SessionProvider`]
//! hydrates it from client storage before its children first render, and
//! [`SessionHandle`] is the only way to change it: `sign_in` and `sign_out`
//! carry the persistence side effects, so storage and the in-memory value
//! cannot drift apart.

use std::rc::Rc;

use api::{ApiClient, ApiConfig, Session};
use dioxus::prelude::*;
use store::{KeyValueStore, SessionStore};

use crate::storage::make_session_backend;

/// Copyable handle to the current session.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: Signal<Option<Session>>,
    store: CopyValue<SessionStore<Rc<dyn KeyValueStore>>>,
}

impl SessionHandle {
    /// Hydrate from `backend` and keep it for later writes. Storage reads are
    /// synchronous, so the restored identity is there before the first render.
    ///
    /// Must be called inside a component scope, which owns the handle.
    pub fn restore(backend: Rc<dyn KeyValueStore>) -> Self {
        let store = SessionStore::new(backend);
        let restored = store.load();
        if let Some(ref session) = restored {
            tracing::info!("Restored session for {}", session.display_name());
        }
        Self {
            state: Signal::new(restored),
            store: CopyValue::new(store),
        }
    }

    /// The current session, `None` when anonymous. Reading subscribes the
    /// calling scope, so guards and headers re-render on change.
    pub fn current(&self) -> Option<Session> {
        self.state.cloned()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.read().is_some()
    }

    /// Persist `session` and publish it to the app.
    pub fn sign_in(&mut self, session: Session) {
        self.store.read().save(&session);
        tracing::info!("Signed in as {} ({})", session.display_name(), session.role);
        self.state.set(Some(session));
    }

    /// Clear the persisted session and token and return to anonymous.
    pub fn sign_out(&mut self) {
        self.store.read().clear();
        tracing::info!("Signed out");
        self.state.set(None);
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Get the API client provided by [`SessionProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component for the session and the API client.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!("Using TalentHub backend at {}", config.base_url);
        ApiClient::new(config)
    });
    use_context_provider(|| SessionHandle::restore(make_session_backend()));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::Role;
    use store::{MemoryStore, TOKEN_KEY, USER_KEY};

    use super::*;

    thread_local! {
        static SEEN: RefCell<Vec<Option<Session>>> = const { RefCell::new(Vec::new()) };
    }

    fn employer() -> Session {
        Session {
            id: "9".to_string(),
            email: "boss@acme.test".to_string(),
            username: "Boss".to_string(),
            role: Role::Employer,
            token: "aaa.bbb.ccc".to_string(),
        }
    }

    fn sign_in_then_out(backend: MemoryStore) -> Element {
        use_hook(move || {
            let mut handle = SessionHandle::restore(Rc::new(backend));
            SEEN.with(|seen| seen.borrow_mut().push(handle.current()));

            handle.sign_in(employer());
            SEEN.with(|seen| seen.borrow_mut().push(handle.current()));

            handle.sign_out();
            SEEN.with(|seen| seen.borrow_mut().push(handle.current()));
        });
        rsx! {}
    }

    fn signed_in_only(backend: MemoryStore) -> Element {
        use_hook(move || {
            let mut handle = SessionHandle::restore(Rc::new(backend));
            handle.sign_in(employer());
        });
        rsx! {}
    }

    fn restore_only(backend: MemoryStore) -> Element {
        use_hook(move || {
            let handle = SessionHandle::restore(Rc::new(backend));
            SEEN.with(|seen| seen.borrow_mut().push(handle.current()));
        });
        rsx! {}
    }

    #[test]
    fn test_sign_in_persists_and_sign_out_clears() {
        SEEN.with(|seen| seen.borrow_mut().clear());
        let backend = MemoryStore::new();

        let mut dom = VirtualDom::new_with_props(sign_in_then_out, backend.clone());
        dom.rebuild_in_place();

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], None);
        assert_eq!(seen[1].as_ref().map(|s| s.role), Some(Role::Employer));
        assert_eq!(seen[2], None);

        // Logout removes both entries.
        assert_eq!(backend.get(TOKEN_KEY), None);
        assert_eq!(backend.get(USER_KEY), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_sign_in_writes_token_and_user() {
        let backend = MemoryStore::new();

        let mut dom = VirtualDom::new_with_props(signed_in_only, backend.clone());
        dom.rebuild_in_place();

        assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("aaa.bbb.ccc"));
        let stored: Session =
            serde_json::from_str(&backend.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored.role, Role::Employer);
        assert_eq!(stored, employer());
    }

    #[test]
    fn test_restore_reads_the_persisted_session() {
        SEEN.with(|seen| seen.borrow_mut().clear());
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone()).save(&employer());

        let mut dom = VirtualDom::new_with_props(restore_only, backend);
        dom.rebuild_in_place();

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert_eq!(seen, vec![Some(employer())]);
    }
}
