//! Profile commands - avatar and biometric preference.

use std::path::Path;

use url::Url;

use crate::backend::open_store;
use crate::cli::{AvatarArgs, BiometricAction, StoreConfig};
use crate::output::{OutputFormat, user_json};

/// Turn what the user typed into the URI stored on the account.
///
/// Anything that already parses as an absolute URI with a scheme longer than one
/// character is kept as-is. Everything else is treated as a local path, which must exist.
pub fn avatar_uri(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    // A single-letter scheme is a Windows drive letter, not a URI
    match Url::parse(source) {
        Ok(url) if url.scheme().len() > 1 => return Ok(url.to_string()),
        _ => {}
    }

    let path = Path::new(source)
        .canonicalize()
        .map_err(|e| format!("Cannot read image {source}: {e}"))?;
    let url = Url::from_file_path(&path)
        .map_err(|()| format!("Cannot turn {} into a file URI", path.display()))?;
    Ok(url.to_string())
}

/// Run the avatar command
pub async fn avatar(
    config: &StoreConfig,
    args: &AvatarArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config).await?;
    if !store.is_authenticated() {
        return Err("Sign in to change your avatar.".into());
    }

    let uri = avatar_uri(&args.source)?;
    store.update_avatar(&uri).await;

    match format {
        OutputFormat::Human => println!("Avatar set to {uri}"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "user": store.current_user().map(user_json) });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the biometric enable/disable command
pub async fn biometric(
    config: &StoreConfig,
    action: BiometricAction,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config).await?;
    let enabled = matches!(action, BiometricAction::Enable);

    if enabled && !store.biometric_available() {
        return Err("Biometric authentication is not available on this device".into());
    }
    if !store.toggle_biometric(enabled).await {
        return Err("Failed to update biometric settings".into());
    }

    match format {
        OutputFormat::Human => {
            if enabled {
                println!("{} authentication enabled", store.biometric_label());
            } else {
                println!("Biometric authentication disabled");
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({ "user": store.current_user().map(user_json) });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
