//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use shop_core::store::{KeyValueStore, StorageError, StorageResult};

/// localStorage-backed store
///
/// Holds `None` when storage is blocked (private mode, sandboxed iframe);
/// reads and writes then fail with `StorageError::Unavailable`.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[STORAGE] localStorage unavailable, cart will not persist");
        }
        Self { storage }
    }

    fn backend(&self) -> StorageResult<&web_sys::Storage> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.backend()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.backend()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
