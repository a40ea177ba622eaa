//! Preference storage for typed key-value state.
//!
//! The only state this crate persists is per-table column preferences,
//! but the storage seam is generic: a [`PrefsBackend`] stores raw
//! bytes, and [`PrefsStore`] wraps it with typed serialization via
//! bincode. The embedding application decides where the bytes live;
//! [`MemoryBackend`] is the in-process default.

mod backend;
mod memory;

pub use backend::PrefsBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Preference storage error type.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
}

/// Typed preference store.
///
/// Wraps a [`PrefsBackend`] with typed serialization via bincode.
#[derive(Clone)]
pub struct PrefsStore {
    backend: Arc<dyn PrefsBackend>,
}

impl PrefsStore {
    /// Create a new store with the given backend.
    pub fn new(backend: impl PrefsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a store over an in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Get a typed value for a key.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PrefsError> {
        match self.backend.get_bytes(key).await? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(PrefsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Set a typed value for a key.
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), PrefsError> {
        let bytes = bincode::serialize(value).map_err(PrefsError::Serialization)?;
        self.backend.set_bytes(key, bytes).await
    }

    /// Delete a key.
    pub async fn delete(&self, key: &str) -> Result<(), PrefsError> {
        self.backend.delete(key).await
    }

    /// Get all keys matching a prefix.
    pub async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PrefsError> {
        self.backend.keys_with_prefix(prefix).await
    }
}
