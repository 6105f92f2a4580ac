//! Error types for the account store
use thiserror::Error;

use super::validation::ValidationReport;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Validation failed: {report}")]
    ValidationFailed { report: ValidationReport },

    #[error("Username already exists: {username}")]
    UsernameAlreadyExists { username: String },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("No user is signed in")]
    NoActiveSession,

    #[error("No accounts exist on this device")]
    NoAccounts,

    #[error("Biometric prompt was cancelled or did not match")]
    BiometricRejected,
}

impl AccountError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AccountError::NoActiveSession | AccountError::NoAccounts
        )
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        matches!(self, AccountError::UsernameAlreadyExists { .. })
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, AccountError::ValidationFailed { .. })
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            AccountError::InvalidCredentials | AccountError::BiometricRejected
        )
    }

    /// The validation report, if this is a validation failure.
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            AccountError::ValidationFailed { report } => Some(report),
            _ => None,
        }
    }
}

impl From<AccountError> for crate::Error {
    fn from(err: AccountError) -> Self {
        crate::Error::Account(err)
    }
}
