//! Blob store implementations for Gatehouse persistence
//!
//! This module provides the core `BlobStore` trait and the backends that implement it.
//!
//! The `BlobStore` trait is a plain key-value interface over string blobs. The account
//! store serializes its whole state into a single blob and writes it back after every
//! mutation, so a backend never needs to understand what it is storing.

use std::any::Any;

use async_trait::async_trait;

use crate::Result;

pub mod errors;
pub mod file;
pub mod in_memory;

pub use errors::BackendError;
pub use file::FileStore;
pub use in_memory::InMemory;

/// Key-value blob store abstracting where the account state is persisted.
///
/// Implementations are expected to replace a blob atomically: a reader sees either the
/// previous value or the new one, never a partial write. Nothing above this trait
/// retries or repairs a failed write.
///
/// All implementations must be `Send` and `Sync` to allow sharing across tasks,
/// and implement `Any` to allow for downcasting if needed.
#[async_trait]
pub trait BlobStore: Send + Sync + Any {
    /// Retrieves the blob stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` if nothing has been stored under the key yet.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Returns a reference to the blob store as a `dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Checks that a key is usable by every backend.
///
/// Keys become file names in `FileStore`, so path separators and relative
/// components are rejected for all backends alike.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if invalid {
        return Err(BackendError::InvalidKey {
            key: key.to_string(),
        }
        .into());
    }
    Ok(())
}
