//! Store construction from CLI configuration.

use std::{path::PathBuf, sync::Arc};

use gatehouse::{
    AccountStore,
    backend::{BlobStore, FileStore, InMemory},
    biometric::{BiometricAuthenticator, BiometryKind, Outcome, Simulated, Unsupported},
};

use crate::cli::{Backend, BiometricMode, SensorKind, StoreConfig};

/// Create the blob store selected by the configuration
pub async fn create_backend(
    config: &StoreConfig,
) -> Result<Arc<dyn BlobStore>, Box<dyn std::error::Error>> {
    match config.backend {
        Backend::File => {
            let data_dir = config
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            tracing::debug!("Using file backend at {}", data_dir.display());
            Ok(Arc::new(FileStore::create(&data_dir).await?))
        }
        Backend::Inmemory => {
            tracing::debug!("Using in-memory backend; nothing will be saved");
            Ok(Arc::new(InMemory::new()))
        }
    }
}

/// Create the biometric capability selected by the configuration
pub fn create_biometrics(config: &StoreConfig) -> Arc<dyn BiometricAuthenticator> {
    let kind = match config.biometric_kind {
        SensorKind::TouchId => BiometryKind::TouchId,
        SensorKind::FaceId => BiometryKind::FaceId,
        SensorKind::Biometrics => BiometryKind::Biometrics,
    };
    match config.biometric {
        BiometricMode::Absent => Arc::new(Unsupported),
        BiometricMode::Accept => Arc::new(Simulated::new(kind, Outcome::Accept)),
        BiometricMode::Deny => Arc::new(Simulated::new(kind, Outcome::Deny)),
        BiometricMode::Error => Arc::new(Simulated::failing()),
    }
}

/// Open the account store and probe the sensor, as the sign-in screen does on mount
pub async fn open_store(config: &StoreConfig) -> Result<AccountStore, Box<dyn std::error::Error>> {
    let backend = create_backend(config).await?;
    let biometrics = create_biometrics(config);
    let mut store = AccountStore::open(backend, biometrics).await?;
    store.check_biometric_availability().await;
    Ok(store)
}

/// Human-readable backend description
pub fn backend_label(config: &StoreConfig) -> String {
    match config.backend {
        Backend::File => {
            let dir = config
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            format!("file ({})", dir.display())
        }
        Backend::Inmemory => "inmemory".to_string(),
    }
}
