//! Persisted Storage
//!
//! Key/value abstraction over `window.localStorage`, plus the JSON codec used
//! for the persisted card collections.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{js_error_message, StorageError};

/// String key/value store that survives page reloads
pub trait KeyValueStore: Send + Sync {
    /// Read a key; `None` if absent or the store cannot be read
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite a key
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store handle shared between components
pub type SharedStore = Arc<dyn KeyValueStore>;

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }

    /// Whether local storage can be reached (it may be disabled by the user)
    pub fn is_available() -> bool {
        Self::local_storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: js_error_message(&e),
            })
    }
}

/// In-memory store, used when local storage is disabled and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Pick the browser store when reachable, otherwise keep state for this page only
pub fn default_store() -> SharedStore {
    if BrowserStorage::is_available() {
        Arc::new(BrowserStorage)
    } else {
        log::warn!("[STORAGE] localStorage unavailable, state will not survive a reload");
        Arc::new(MemoryStorage::new())
    }
}

/// Read a JSON array stored under `key`.
///
/// Missing keys and unparsable content both load as an empty collection.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("[STORAGE] Ignoring unreadable {}: {}", key, e);
            Vec::new()
        }
    }
}

/// Overwrite `key` with the whole collection as a JSON array
pub fn save_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    values: &[T],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(values).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)
}
