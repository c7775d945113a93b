//! Shared session-storage backend for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the session is persisted in:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native**: one file per key under `<data_dir>/talenthub/` via [`store::FileStore`]
//! - **WASM without `web`**: [`store::MemoryStore`], nothing survives a reload

use std::rc::Rc;

use store::KeyValueStore;

/// Create a platform-appropriate storage backend for the session.
pub fn make_session_backend() -> Rc<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("talenthub");
        Rc::new(store::FileStore::new(base))
    }
}
