//!
//! Gatehouse: a local account shell.
//! This library provides the account store behind a sign-in screen and a profile screen.
//!
//! ## Core Concepts
//!
//! * **Account store (`account::AccountStore`)**: Owns the list of known user records and the
//!   current session, validates sign-up and sign-in input, and writes its state back to a
//!   blob store after every mutation.
//! * **Blob stores (`backend::BlobStore`)**: A pluggable key-value layer for persisting the
//!   store's JSON snapshot. `InMemory` keeps blobs in the process, `FileStore` writes one file
//!   per key.
//! * **Biometric capability (`biometric::BiometricAuthenticator`)**: The seam to the platform
//!   sensor. The store only ever asks "is a sensor available" and "did the user accept this
//!   prompt".

pub mod account;
pub mod backend;
pub mod biometric;

pub use account::{AccountStore, AuthMode, UserRecord};

/// Result type used throughout the Gatehouse library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Gatehouse library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured account errors from the account module
    #[error(transparent)]
    Account(account::AccountError),

    /// Structured blob store errors from the backend module
    #[error(transparent)]
    Backend(backend::BackendError),

    /// Structured capability errors from the biometric module
    #[error(transparent)]
    Biometric(biometric::BiometricError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Account(_) => "account",
            Error::Backend(_) => "backend",
            Error::Biometric(_) => "biometric",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_not_found(),
            Error::Backend(backend_err) => backend_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_authentication_error(),
            Error::Biometric(_) => true,
            _ => false,
        }
    }

    /// Check if this error came from the biometric capability.
    pub fn is_biometric_error(&self) -> bool {
        matches!(self, Error::Biometric(_))
    }

    /// Check if this error is blob store related.
    pub fn is_backend_error(&self) -> bool {
        matches!(self, Error::Backend(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Backend(backend_err) => backend_err.is_io_error(),
            _ => false,
        }
    }
}
