//! Theme preference storage

use forum_core::{CoreError, CoreResult, KeyValueStore, MemoryStore};
use web_sys::{Storage, window};

/// `localStorage`, or process memory when the browser refuses it
pub enum PreferenceStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl PreferenceStore {
    pub fn detect() -> Self {
        if let Some(window) = window()
            && let Ok(Some(storage)) = window.local_storage()
        {
            return Self::Local(storage);
        }

        tracing::warn!("localStorage unavailable, theme preference will not persist");
        Self::Memory(MemoryStore::new())
    }
}

impl KeyValueStore for PreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| CoreError::storage_error(format!("{e:?}"))),
            Self::Memory(store) => store.set(key, value),
        }
    }
}
