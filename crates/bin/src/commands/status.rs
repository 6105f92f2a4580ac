//! Status and account listing commands.

use crate::backend::{backend_label, open_store};
use crate::cli::StoreConfig;
use crate::output::{OutputFormat, print_table, user_json};

/// Run the status command
pub async fn status(
    config: &StoreConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config).await?;
    let backend_str = backend_label(config);
    let signed_in = store.current_user().map(|u| u.username.as_str());
    let sensor = store.biometric_type().map(|kind| kind.label());

    match format {
        OutputFormat::Human => {
            println!("Backend:     {backend_str}");
            println!("Accounts:    {}", store.users().len());
            println!("Signed in:   {}", signed_in.unwrap_or("-"));
            println!("Biometrics:  {}", sensor.unwrap_or("unavailable"));
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "backend": backend_str,
                "accounts": store.users().len(),
                "signedIn": signed_in,
                "biometricAvailable": store.biometric_available(),
                "biometricType": sensor,
                "authMode": store.auth_mode().as_str(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the users command
pub async fn users(
    config: &StoreConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config).await?;
    let current = store.current_user().map(|u| u.username.as_str());

    match format {
        OutputFormat::Human => {
            if store.users().is_empty() {
                println!("No accounts found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = store
                .users()
                .iter()
                .map(|user| {
                    vec![
                        if Some(user.username.as_str()) == current {
                            "*".to_string()
                        } else {
                            String::new()
                        },
                        user.username.clone(),
                        if user.uses_biometrics() { "on" } else { "off" }.to_string(),
                        user.avatar.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            print_table(&["", "USERNAME", "BIOMETRIC", "AVATAR"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = store.users().iter().map(user_json).collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }
    Ok(())
}
