//! Biometric capability seam
//!
//! The account store never talks to a sensor directly. It asks a
//! [`BiometricAuthenticator`] whether a sensor is present and whether the user accepted a
//! prompt, and treats every failure as a plain "no".

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

pub mod errors;
pub mod simulated;

pub use errors::BiometricError;
pub use simulated::{Outcome, Simulated, Unsupported};

/// Prompt shown when signing in with biometrics.
pub const SIGN_IN_PROMPT: &str = "Sign in to your account";

/// Prompt shown when confirming the sensor before enabling biometric sign-in.
pub const ENABLE_PROMPT: &str = "Enable biometric authentication";

/// Label used when no specific sensor kind is known.
pub const FALLBACK_LABEL: &str = "Device Authentication";

/// Category of biometric sensor reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiometryKind {
    /// Fingerprint sensor
    TouchId,
    /// Face recognition
    FaceId,
    /// Generic platform biometrics
    Biometrics,
    /// Sensor present but the platform did not say which
    Unknown,
}

impl BiometryKind {
    /// Human-readable name for settings toggles and sign-in buttons.
    pub fn label(&self) -> &'static str {
        match self {
            BiometryKind::TouchId => "Touch ID",
            BiometryKind::FaceId => "Face ID",
            BiometryKind::Biometrics => "Biometric Authentication",
            BiometryKind::Unknown => FALLBACK_LABEL,
        }
    }
}

impl fmt::Display for BiometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for an optional kind, falling back to the device credential wording.
pub fn label_for(kind: Option<BiometryKind>) -> &'static str {
    kind.map_or(FALLBACK_LABEL, |k| k.label())
}

/// Answer to "is a sensor available on this device".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability {
    pub available: bool,
    pub kind: Option<BiometryKind>,
}

impl Availability {
    /// A device without a usable sensor.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// A device with a sensor of the given kind.
    pub fn with_kind(kind: BiometryKind) -> Self {
        Self {
            available: true,
            kind: Some(kind),
        }
    }
}

/// Platform biometric capability.
///
/// Implementations forward to whatever the platform offers. A cancelled or denied
/// prompt is `Ok(false)`; `Err` is reserved for the platform call itself failing.
#[async_trait]
pub trait BiometricAuthenticator: Send + Sync {
    /// Reports whether a sensor is present and, if so, which kind.
    async fn is_available(&self) -> Result<Availability>;

    /// Shows `prompt` and waits for the user to accept or dismiss it.
    async fn authenticate(&self, prompt: &str) -> Result<bool>;
}
