//! In-memory blob store implementation
//!
//! Keeps blobs in a `HashMap` for the lifetime of the process. Suitable for tests
//! and for ephemeral runs where nothing should reach the disk.

use std::{any::Any, collections::HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BlobStore, validate_key};
use crate::Result;

/// A simple in-memory blob store using a `HashMap` for storage.
///
/// Cloning the contents out with [`InMemory::snapshot`] lets tests inspect exactly
/// what a caller persisted.
#[derive(Debug, Default)]
pub struct InMemory {
    blobs: RwLock<HashMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `blobs`.
    pub fn with_blobs<I, K, V>(blobs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            blobs: RwLock::new(
                blobs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Returns a copy of every stored blob.
    pub async fn snapshot(&self) -> HashMap<String, String> {
        self.blobs.read().await.clone()
    }
}

#[async_trait]
impl BlobStore for InMemory {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.blobs
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
