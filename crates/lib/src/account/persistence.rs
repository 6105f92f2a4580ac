//! Persistence for the account store
//!
//! The store's durable state (the user list and the current session) is serialized as a
//! single JSON blob wrapped in a versioned envelope:
//!
//! ```json
//! { "state": { "users": [...], "currentUser": null }, "version": 0 }
//! ```
//!
//! Screen mode and sensor availability are session-only and never written.

use serde::{Deserialize, Serialize};

use super::types::UserRecord;
use crate::{
    Error, Result,
    backend::{BackendError, BlobStore},
};

/// Key the account state is stored under.
pub const STORAGE_KEY: &str = "auth-storage";

/// The current persistence format version.
const PERSISTENCE_VERSION: u32 = 0;

/// Durable part of the store's state, as read back from a blob.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersistedState {
    #[serde(default)]
    pub(crate) users: Vec<UserRecord>,
    #[serde(default)]
    pub(crate) current_user: Option<UserRecord>,
}

/// Borrowed view used when writing, so saving never clones the user list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedStateRef<'a> {
    users: &'a [UserRecord],
    current_user: Option<&'a UserRecord>,
}

#[derive(Serialize)]
struct EnvelopeOut<'a> {
    state: PersistedStateRef<'a>,
    version: u32,
}

#[derive(Deserialize)]
struct EnvelopeIn {
    #[serde(default)]
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

/// Serializes the durable state into a blob.
pub(crate) fn encode(users: &[UserRecord], current_user: Option<&UserRecord>) -> Result<String> {
    let envelope = EnvelopeOut {
        state: PersistedStateRef {
            users,
            current_user,
        },
        version: PERSISTENCE_VERSION,
    };
    serde_json::to_string(&envelope)
        .map_err(|e| -> Error { BackendError::SerializationFailed { source: e }.into() })
}

/// Parses a blob written by [`encode`].
pub(crate) fn decode(blob: &str) -> Result<PersistedState> {
    let envelope: EnvelopeIn = serde_json::from_str(blob)
        .map_err(|e| -> Error { BackendError::DeserializationFailed { source: e }.into() })?;

    if envelope.version != PERSISTENCE_VERSION {
        return Err(BackendError::UnsupportedVersion {
            found: envelope.version,
            supported: PERSISTENCE_VERSION,
        }
        .into());
    }
    Ok(envelope.state)
}

/// Loads the durable state, or an empty state if nothing has been saved yet.
pub(crate) async fn load(backend: &dyn BlobStore) -> Result<PersistedState> {
    match backend.get(STORAGE_KEY).await? {
        Some(blob) => decode(&blob),
        None => Ok(PersistedState::default()),
    }
}

/// Writes the durable state, replacing whatever was stored before.
pub(crate) async fn save(
    backend: &dyn BlobStore,
    users: &[UserRecord],
    current_user: Option<&UserRecord>,
) -> Result<()> {
    let blob = encode(users, current_user)?;
    backend.put(STORAGE_KEY, &blob).await
}
