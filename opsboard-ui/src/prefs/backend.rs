//! Preference backend trait.

use async_trait::async_trait;

use super::PrefsError;

/// Backend trait for preference storage.
///
/// Implementations handle raw byte storage/retrieval.
/// [`PrefsStore`](super::PrefsStore) wraps this with typed
/// serialization.
#[async_trait]
pub trait PrefsBackend: Send + Sync {
    /// Get raw bytes for a key.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PrefsError>;

    /// Set raw bytes for a key.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PrefsError>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> Result<(), PrefsError>;

    /// Get all keys matching a prefix.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PrefsError>;
}
