//! The account store
//!
//! Owns the user list and the current session, and writes both back to the blob store
//! after every mutation.

use std::sync::Arc;

use super::{
    errors::AccountError,
    persistence,
    types::{AuthMode, UserRecord},
    validation::{validate_sign_in, validate_sign_up},
};
use crate::{
    Error, Result,
    backend::BlobStore,
    biometric::{self, BiometricAuthenticator, BiometryKind},
};

/// Account state for one device.
///
/// Created once at startup with [`AccountStore::open`] and handed to whatever renders
/// the sign-in and profile screens. Mutating operations take `&mut self`, so only one
/// user action runs against a store at a time.
///
/// Every operation comes in two forms: a `try_*` method returning a structured
/// [`AccountError`], and a plain method that logs the failure and returns `false`.
pub struct AccountStore {
    backend: Arc<dyn BlobStore>,
    biometrics: Arc<dyn BiometricAuthenticator>,

    users: Vec<UserRecord>,
    current_user: Option<UserRecord>,

    // Session-only, never persisted
    auth_mode: AuthMode,
    biometric_available: bool,
    biometric_type: Option<BiometryKind>,
}

impl std::fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("users", &self.users.len())
            .field(
                "current_user",
                &self.current_user.as_ref().map(|u| &u.username),
            )
            .field("auth_mode", &self.auth_mode)
            .field("biometric_available", &self.biometric_available)
            .field("biometric_type", &self.biometric_type)
            .finish()
    }
}

impl AccountStore {
    /// Loads the persisted state from `backend` and builds a store around it.
    ///
    /// A backend with nothing stored yields an empty store in sign-in mode.
    ///
    /// # Errors
    /// Fails if the backend cannot be read or the stored blob cannot be understood.
    pub async fn open(
        backend: Arc<dyn BlobStore>,
        biometrics: Arc<dyn BiometricAuthenticator>,
    ) -> Result<Self> {
        let state = persistence::load(backend.as_ref()).await?;
        tracing::debug!(
            users = state.users.len(),
            signed_in = state.current_user.is_some(),
            "Loaded account state"
        );

        Ok(Self {
            backend,
            biometrics,
            users: state.users,
            current_user: state.current_user,
            auth_mode: AuthMode::default(),
            biometric_available: false,
            biometric_type: None,
        })
    }

    // === Read access ===

    /// All known accounts, in creation order.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// The signed-in account, if any.
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Result of the last [`check_biometric_availability`](Self::check_biometric_availability).
    pub fn biometric_available(&self) -> bool {
        self.biometric_available
    }

    pub fn biometric_type(&self) -> Option<BiometryKind> {
        self.biometric_type
    }

    /// Display name for the detected sensor.
    pub fn biometric_label(&self) -> &'static str {
        biometric::label_for(self.biometric_type)
    }

    /// Whether the sign-in form should offer a biometric button.
    pub fn can_offer_biometric_sign_in(&self) -> bool {
        self.auth_mode == AuthMode::SignIn && self.biometric_available
    }

    /// The blob store this account state is persisted to.
    pub fn backend(&self) -> &Arc<dyn BlobStore> {
        &self.backend
    }

    // === Screen mode ===

    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
    }

    /// Flips between sign-in and sign-up, returning the new mode.
    pub fn toggle_auth_mode(&mut self) -> AuthMode {
        self.auth_mode = self.auth_mode.toggled();
        self.auth_mode
    }

    // === Sign up / sign in / sign out ===

    /// Creates an account and signs it in.
    ///
    /// Usernames and passwords with surrounding whitespace are rejected rather than
    /// trimmed. On success the form switches back to sign-in mode.
    pub async fn try_sign_up(
        &mut self,
        username: &str,
        password: &str,
        verify_password: &str,
    ) -> Result<()> {
        let report = validate_sign_up(username, password, verify_password);
        if !report.is_valid() {
            return Err(AccountError::ValidationFailed { report }.into());
        }

        let username = username.trim();
        if self.users.iter().any(|user| user.username == username) {
            return Err(AccountError::UsernameAlreadyExists {
                username: username.to_string(),
            }
            .into());
        }

        let record = UserRecord::new(username, password.trim());
        self.users.push(record.clone());
        self.current_user = Some(record);
        self.auth_mode = AuthMode::SignIn;
        tracing::info!(username, "Account created");

        self.persist().await;
        Ok(())
    }

    /// See [`try_sign_up`](Self::try_sign_up).
    pub async fn sign_up(&mut self, username: &str, password: &str, verify_password: &str) -> bool {
        let result = self.try_sign_up(username, password, verify_password).await;
        absorb("sign up", result)
    }

    /// Signs in the account whose trimmed username and password both match exactly.
    ///
    /// Surrounding whitespace is tolerated here, unlike on sign-up.
    pub async fn try_sign_in(&mut self, username: &str, password: &str) -> Result<()> {
        let report = validate_sign_in(username, password);
        if !report.is_valid() {
            return Err(AccountError::ValidationFailed { report }.into());
        }

        let (username, password) = (username.trim(), password.trim());
        let matched = self
            .users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .cloned()
            .ok_or(AccountError::InvalidCredentials)?;

        tracing::info!(username, "Signed in");
        self.current_user = Some(matched);
        self.persist().await;
        Ok(())
    }

    /// See [`try_sign_in`](Self::try_sign_in).
    pub async fn sign_in(&mut self, username: &str, password: &str) -> bool {
        let result = self.try_sign_in(username, password).await;
        absorb("sign in", result)
    }

    /// Signs in with the platform sensor.
    ///
    /// An accepted prompt signs in the first account ever created, whichever account
    /// enabled biometrics.
    // TODO: pick the account that enabled biometric sign-in once the prompt result can
    // carry which user it belongs to.
    pub async fn try_sign_in_with_biometric(&mut self) -> Result<()> {
        let accepted = self
            .biometrics
            .authenticate(biometric::SIGN_IN_PROMPT)
            .await?;
        if !accepted {
            return Err(AccountError::BiometricRejected.into());
        }

        let first = self.users.first().cloned().ok_or(AccountError::NoAccounts)?;
        tracing::info!(username = %first.username, "Signed in with biometrics");
        self.current_user = Some(first);
        self.persist().await;
        Ok(())
    }

    /// See [`try_sign_in_with_biometric`](Self::try_sign_in_with_biometric).
    pub async fn sign_in_with_biometric(&mut self) -> bool {
        let result = self.try_sign_in_with_biometric().await;
        absorb("biometric sign in", result)
    }

    /// Ends the current session. Accounts are kept.
    pub async fn sign_out(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(username = %user.username, "Signed out");
        }
        self.persist().await;
    }

    // === Profile ===

    /// Sets the signed-in account's avatar URI.
    pub async fn try_update_avatar(&mut self, uri: &str) -> Result<()> {
        self.update_current(|user| user.avatar = Some(uri.to_string()))?;
        self.persist().await;
        Ok(())
    }

    /// See [`try_update_avatar`](Self::try_update_avatar). Does nothing when signed out.
    pub async fn update_avatar(&mut self, uri: &str) -> bool {
        let result = self.try_update_avatar(uri).await;
        absorb("update avatar", result)
    }

    /// Switches biometric sign-in on or off for the signed-in account.
    ///
    /// Enabling first asks the sensor to confirm the user; if that prompt fails nothing
    /// changes. Disabling never prompts.
    pub async fn try_toggle_biometric(&mut self, enabled: bool) -> Result<()> {
        if self.current_user.is_none() {
            return Err(AccountError::NoActiveSession.into());
        }

        if enabled {
            let accepted = self
                .biometrics
                .authenticate(biometric::ENABLE_PROMPT)
                .await?;
            if !accepted {
                return Err(AccountError::BiometricRejected.into());
            }
        }

        self.update_current(|user| user.biometric_enabled = Some(enabled))?;
        self.persist().await;
        Ok(())
    }

    /// See [`try_toggle_biometric`](Self::try_toggle_biometric).
    pub async fn toggle_biometric(&mut self, enabled: bool) -> bool {
        let result = self.try_toggle_biometric(enabled).await;
        absorb("toggle biometric", result)
    }

    /// Asks the platform whether a sensor is present and remembers the answer.
    ///
    /// Never fails: a platform error is logged and recorded as "unavailable".
    pub async fn check_biometric_availability(&mut self) {
        match self.biometrics.is_available().await {
            Ok(availability) => {
                self.biometric_available = availability.available;
                self.biometric_type = if availability.available {
                    Some(availability.kind.unwrap_or(BiometryKind::Unknown))
                } else {
                    None
                };
            }
            Err(e) => {
                tracing::warn!("Failed to check biometric availability: {e}");
                self.biometric_available = false;
                self.biometric_type = None;
            }
        }
    }

    // === Internals ===

    /// Applies `change` to the session copy and to the stored record with the same username.
    fn update_current(&mut self, change: impl Fn(&mut UserRecord)) -> Result<()> {
        let current = self
            .current_user
            .as_mut()
            .ok_or(AccountError::NoActiveSession)?;
        change(current);

        for user in self
            .users
            .iter_mut()
            .filter(|user| user.username == current.username)
        {
            change(user);
        }
        Ok(())
    }

    /// Writes the durable state. The in-memory state stays authoritative if this fails.
    async fn persist(&self) {
        if let Err(e) =
            persistence::save(self.backend.as_ref(), &self.users, self.current_user.as_ref()).await
        {
            tracing::error!("Failed to persist account state: {e}");
        }
    }
}

/// Collapses an operation result into the boolean surface, logging why it failed.
fn absorb(operation: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(Error::Account(AccountError::ValidationFailed { report })) => {
            tracing::debug!(errors = ?report.messages(), "{operation} validation failed");
            false
        }
        Err(e @ Error::Account(_)) => {
            tracing::debug!("{operation} failed: {e}");
            false
        }
        Err(e) => {
            tracing::warn!("{operation} failed: {e}");
            false
        }
    }
}
