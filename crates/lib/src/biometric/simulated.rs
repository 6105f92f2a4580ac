//! Authenticators that do not need a real sensor
//!
//! [`Unsupported`] stands in for a device without biometric hardware. [`Simulated`]
//! answers prompts from a script, which the test suite and the CLI both rely on.

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;

use super::{Availability, BiometricAuthenticator, BiometricError, BiometryKind};
use crate::Result;

/// How a simulated prompt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user accepted the prompt.
    Accept,
    /// The user cancelled or the sensor did not match.
    Deny,
    /// The platform call itself failed.
    Error,
}

/// Authenticator for devices without a sensor.
///
/// Reports unavailable and fails every prompt with [`BiometricError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

#[async_trait]
impl BiometricAuthenticator for Unsupported {
    async fn is_available(&self) -> Result<Availability> {
        Ok(Availability::unavailable())
    }

    async fn authenticate(&self, _prompt: &str) -> Result<bool> {
        Err(BiometricError::Unavailable.into())
    }
}

/// Scripted authenticator.
///
/// Queued outcomes are consumed first, one per prompt; once the queue is empty every
/// prompt resolves to the fallback outcome. Every prompt shown is recorded.
#[derive(Debug)]
pub struct Simulated {
    availability: Availability,
    fail_availability_check: bool,
    fallback: Outcome,
    queued: Mutex<VecDeque<Outcome>>,
    prompts: Mutex<Vec<String>>,
}

impl Simulated {
    /// A sensor of `kind` that resolves every prompt to `fallback`.
    pub fn new(kind: BiometryKind, fallback: Outcome) -> Self {
        Self {
            availability: Availability::with_kind(kind),
            fail_availability_check: false,
            fallback,
            queued: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A sensor that accepts every prompt.
    pub fn accepting(kind: BiometryKind) -> Self {
        Self::new(kind, Outcome::Accept)
    }

    /// A sensor that denies every prompt.
    pub fn denying(kind: BiometryKind) -> Self {
        Self::new(kind, Outcome::Deny)
    }

    /// A sensor whose platform calls fail, including the availability check.
    pub fn failing() -> Self {
        Self {
            fail_availability_check: true,
            ..Self::new(BiometryKind::Unknown, Outcome::Error)
        }
    }

    /// Overrides what the availability check reports.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Queues outcomes to be used, in order, before the fallback.
    pub fn with_script(self, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        self.queued
            .lock()
            .expect("simulated authenticator lock poisoned")
            .extend(outcomes);
        self
    }

    /// Prompts shown so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .expect("simulated authenticator lock poisoned")
            .clone()
    }

    fn next_outcome(&self) -> Outcome {
        self.queued
            .lock()
            .expect("simulated authenticator lock poisoned")
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

#[async_trait]
impl BiometricAuthenticator for Simulated {
    async fn is_available(&self) -> Result<Availability> {
        if self.fail_availability_check {
            return Err(BiometricError::AvailabilityCheckFailed {
                reason: "simulated sensor failure".to_string(),
            }
            .into());
        }
        Ok(self.availability)
    }

    async fn authenticate(&self, prompt: &str) -> Result<bool> {
        self.prompts
            .lock()
            .expect("simulated authenticator lock poisoned")
            .push(prompt.to_string());

        match self.next_outcome() {
            Outcome::Accept => Ok(true),
            Outcome::Deny => Ok(false),
            Outcome::Error => Err(BiometricError::PromptFailed {
                reason: "simulated sensor failure".to_string(),
            }
            .into()),
        }
    }
}
