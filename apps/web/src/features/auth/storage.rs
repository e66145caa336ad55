//! Client-side session storage. The credential pair lives only in a
//! key-value store (browser local storage in production); the flow and the
//! session guard reach it through `KeyValueStore` so they never touch the
//! global `window.localStorage` directly.

use crate::{app_lib::AppError, features::auth::types::CredentialPair};
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

/// In-memory store, used when local storage is unavailable and in tests.
/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage` wrapper.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// Opens local storage for the current window.
    pub fn local() -> Result<Self, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::Config("Window not found".into()))?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| AppError::Storage("Local storage is unavailable.".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| {
                AppError::Storage("Unable to save the session in this browser.".to_string())
            })
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// Reads and writes the credential pair on top of a `KeyValueStore`.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists both tokens. A failed write leaves storage as it was: when
    /// the refresh token cannot be written the previous access token is put
    /// back, and if even that fails both keys are cleared.
    pub fn save(&self, credentials: &CredentialPair) -> Result<(), AppError> {
        let previous_access = self.store.get(ACCESS_TOKEN_KEY);

        self.store.set(ACCESS_TOKEN_KEY, credentials.access_token())?;
        if let Err(err) = self.store.set(REFRESH_TOKEN_KEY, credentials.refresh_token()) {
            let restored = match previous_access.as_deref() {
                Some(value) => self.store.set(ACCESS_TOKEN_KEY, value),
                None => {
                    self.store.remove(ACCESS_TOKEN_KEY);
                    Ok(())
                }
            };
            if restored.is_err() {
                self.clear();
            }
            return Err(err);
        }
        Ok(())
    }

    /// Stored access token; blank values count as absent.
    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// The complete pair, or `None` if either half is missing.
    pub fn load(&self) -> Option<CredentialPair> {
        let access_token = self.store.get(ACCESS_TOKEN_KEY)?;
        let refresh_token = self.store.get(REFRESH_TOKEN_KEY)?;
        CredentialPair::new(access_token, refresh_token).ok()
    }

    /// Removes both tokens unconditionally.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }

    #[cfg(test)]
    pub fn inner(&self) -> &S {
        &self.store
    }
}
