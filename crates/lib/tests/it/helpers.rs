//! Shared setup for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use gatehouse::{
    AccountStore,
    backend::{BlobStore, FileStore, InMemory},
    biometric::{BiometricAuthenticator, BiometryKind, Simulated, Unsupported},
};
use tempfile::TempDir;

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Creates a test backend based on TEST_BACKEND env var.
///
/// Supported values:
/// - "inmemory" or unset: InMemory backend (default)
/// - "file": FileStore in a fresh temporary directory
///
/// The returned `TempDir` must be kept alive for as long as the backend is used.
pub async fn test_backend() -> (Arc<dyn BlobStore>, Option<TempDir>) {
    match std::env::var("TEST_BACKEND").as_deref() {
        Ok("file") => {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let store = FileStore::open(dir.path())
                .await
                .expect("Failed to open file backend");
            (Arc::new(store), Some(dir))
        }
        Ok("inmemory") | Err(_) => (Arc::new(InMemory::new()), None),
        Ok(other) => panic!("Unknown TEST_BACKEND value: {other}"),
    }
}

/// A device with no sensor.
pub fn no_sensor() -> Arc<dyn BiometricAuthenticator> {
    Arc::new(Unsupported)
}

/// A device whose Touch ID sensor accepts every prompt.
pub fn accepting_sensor() -> Arc<Simulated> {
    Arc::new(Simulated::accepting(BiometryKind::TouchId))
}

/// Opens a store over the given backend.
pub async fn open_store(
    backend: Arc<dyn BlobStore>,
    biometrics: Arc<dyn BiometricAuthenticator>,
) -> AccountStore {
    AccountStore::open(backend, biometrics)
        .await
        .expect("Failed to open account store")
}

/// Signs up every `(username, password)` pair, leaving the last one signed in.
pub async fn sign_up_all(store: &mut AccountStore, accounts: &[(&str, &str)]) {
    for (username, password) in accounts {
        assert!(
            store.sign_up(username, password, password).await,
            "Failed to sign up {username}"
        );
    }
}

/// Asserts the signed-in account's username.
pub fn assert_signed_in_as(store: &AccountStore, username: &str) {
    let current = store.current_user().expect("Expected a signed-in user");
    assert_eq!(current.username, username);
}

/// Asserts the session copy matches the stored record with the same username.
pub fn assert_session_in_sync(store: &AccountStore) {
    if let Some(current) = store.current_user() {
        let stored = store
            .users()
            .iter()
            .find(|u| u.username == current.username)
            .expect("Session user missing from user list");
        assert_eq!(stored, current);
    }
}
