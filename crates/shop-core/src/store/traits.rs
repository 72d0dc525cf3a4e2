//! Key/Value Storage Trait
//!
//! Implementations: browser localStorage (UI crate), in-memory.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage backend errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend is not available")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// String key/value store, whole-value overwrite semantics
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` when the key is missing
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing whatever was stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
