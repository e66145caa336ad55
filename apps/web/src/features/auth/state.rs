//! Browser bindings for the auth feature: which storage backs the session,
//! and how the login flow state lives in a Leptos signal.

use crate::{
    app_lib::AppError,
    features::auth::{
        flow::{FlowCell, LoginFlow},
        storage::{BrowserStorage, KeyValueStore, MemoryStore, SessionStore},
    },
};
use leptos::prelude::*;
use tracing::warn;

thread_local! {
    static FALLBACK_STORE: MemoryStore = MemoryStore::new();
}

/// Local storage when the browser allows it, otherwise a per-tab memory
/// store so the login still completes (it will not survive a reload).
#[derive(Clone, Debug)]
pub enum ClientStorage {
    Local(BrowserStorage),
    Memory(MemoryStore),
}

impl KeyValueStore for ClientStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            ClientStorage::Local(storage) => storage.get(key),
            ClientStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        match self {
            ClientStorage::Local(storage) => storage.set(key, value),
            ClientStorage::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            ClientStorage::Local(storage) => storage.remove(key),
            ClientStorage::Memory(storage) => storage.remove(key),
        }
    }
}

/// Opens the session store for the current page.
pub fn session_store() -> SessionStore<ClientStorage> {
    let storage = match BrowserStorage::local() {
        Ok(storage) => ClientStorage::Local(storage),
        Err(err) => {
            warn!(error = %err, "local storage unavailable; keeping session in memory");
            ClientStorage::Memory(FALLBACK_STORE.with(Clone::clone))
        }
    };
    SessionStore::new(storage)
}

impl FlowCell for RwSignal<LoginFlow> {
    fn with_flow<R>(&self, update: impl FnOnce(&mut LoginFlow) -> R) -> Option<R> {
        self.try_update(update)
    }
}
