//! Blob store error types for the Gatehouse backend.
//!
//! This module defines structured error types for persistence operations,
//! providing better error context and type safety compared to string-based errors.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted blobs.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// Key cannot be used as a storage name.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey {
        /// The rejected key
        key: String,
    },

    /// Data directory for a file-backed store does not exist.
    #[error("Data directory not found: {path}")]
    DataDirNotFound {
        /// The missing directory
        path: String,
    },

    /// Serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Persisted blob was written by an unsupported format version.
    #[error("Unsupported persistence version {found}; only version {supported} is supported")]
    UnsupportedVersion {
        /// Version found in the blob
        found: u32,
        /// The only version this build reads
        supported: u32,
    },

    /// File I/O error.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl BackendError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::DataDirNotFound { .. })
    }

    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            BackendError::FileIo { .. }
                | BackendError::SerializationFailed { .. }
                | BackendError::DeserializationFailed { .. }
        )
    }

    /// Check if this error means the persisted state could not be understood.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            BackendError::DeserializationFailed { .. } | BackendError::UnsupportedVersion { .. }
        )
    }
}

// Conversion from BackendError to the main Error type
impl From<BackendError> for crate::Error {
    fn from(err: BackendError) -> Self {
        crate::Error::Backend(err)
    }
}
