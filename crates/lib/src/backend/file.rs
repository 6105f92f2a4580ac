//! File-backed blob store
//!
//! Each key maps to `<data_dir>/<key>.json`. Writes go to a sibling temp file first and
//! are then renamed over the target, so a crash mid-write leaves the previous blob in place.

use std::{
    any::Any,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use super::{BackendError, BlobStore, validate_key};
use crate::{Error, Result};

const BLOB_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Blob store persisting every key as a JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Opens a store over an existing data directory.
    ///
    /// # Errors
    /// Returns `BackendError::DataDirNotFound` if `data_dir` is not a directory.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        match tokio::fs::metadata(&data_dir).await {
            Ok(meta) if meta.is_dir() => Ok(Self { data_dir }),
            Ok(_) => Err(BackendError::DataDirNotFound {
                path: data_dir.display().to_string(),
            }
            .into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BackendError::DataDirNotFound {
                    path: data_dir.display().to_string(),
                }
                .into())
            }
            Err(e) => Err(BackendError::FileIo { source: e }.into()),
        }
    }

    /// Opens a store, creating the data directory (and its parents) if needed.
    pub async fn create(data_dir: impl AsRef<Path>) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir.as_ref())
            .await
            .map_err(|e| -> Error { BackendError::FileIo { source: e }.into() })?;
        Self::open(data_dir).await
    }

    /// The directory blobs are written to.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding the blob for `key`.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.{BLOB_EXTENSION}"))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{key}.{BLOB_EXTENSION}.{TEMP_SUFFIX}"))
    }
}

#[async_trait]
impl BlobStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match tokio::fs::read_to_string(self.blob_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BackendError::FileIo { source: e }.into()),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let temp = self.temp_path(key);
        tokio::fs::write(&temp, value)
            .await
            .map_err(|e| -> Error { BackendError::FileIo { source: e }.into() })?;
        tokio::fs::rename(&temp, self.blob_path(key))
            .await
            .map_err(|e| -> Error { BackendError::FileIo { source: e }.into() })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
