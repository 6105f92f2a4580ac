//! Error types for the biometric capability
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BiometricError {
    #[error("Biometric authentication is not available on this device")]
    Unavailable,

    #[error("Error checking biometric availability: {reason}")]
    AvailabilityCheckFailed { reason: String },

    #[error("Biometric authentication failed: {reason}")]
    PromptFailed { reason: String },
}

impl BiometricError {
    /// Check if the failure means there is no sensor to talk to.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BiometricError::Unavailable)
    }
}

impl From<BiometricError> for crate::Error {
    fn from(err: BiometricError) -> Self {
        crate::Error::Biometric(err)
    }
}
