//! Core data types for the account store

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single account: credentials plus profile preferences.
///
/// Usernames are unique within a store. The uniqueness is enforced when an account is
/// created, not by the storage layer.
///
/// The password is stored and compared as plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Login identifier, case-sensitive
    pub username: String,

    /// Plaintext password
    pub password: String,

    /// URI of the profile picture, as returned by the image source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Whether the user opted into biometric sign-in.
    /// Unset until the user first touches the setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometric_enabled: Option<bool>,
}

impl UserRecord {
    /// A fresh record with no avatar and no biometric preference.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            avatar: None,
            biometric_enabled: None,
        }
    }

    /// Whether biometric sign-in has been switched on for this record.
    pub fn uses_biometrics(&self) -> bool {
        self.biometric_enabled.unwrap_or(false)
    }
}

/// Which form the sign-in screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "signin",
            AuthMode::SignUp => "signup",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
