//! Sign-up, sign-in and sign-out commands.

use gatehouse::AuthMode;

use crate::backend::open_store;
use crate::cli::{SigninArgs, SignupArgs, StoreConfig};
use crate::output::{OutputFormat, user_json};

const SIGN_UP_FAILED: &str = "Username already exists or validation failed. Please try again.";
const SIGN_IN_FAILED: &str = "Invalid username or password";
const BIOMETRIC_FAILED: &str =
    "Biometric authentication failed. Please try again or use your username and password.";

/// Run the signup command
pub async fn signup(
    config: &StoreConfig,
    args: &SignupArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config).await?;
    store.set_auth_mode(AuthMode::SignUp);

    if !store
        .sign_up(&args.username, &args.password, &args.verify_password)
        .await
    {
        return Err(SIGN_UP_FAILED.into());
    }

    match format {
        OutputFormat::Human => {
            println!(
                "Account created successfully! You are signed in as {}.",
                args.username.trim()
            );
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "created": true,
                "user": store.current_user().map(user_json),
                "authMode": store.auth_mode().as_str(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the signin command
pub async fn signin(
    config: &StoreConfig,
    args: &SigninArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config).await?;
    if !store.sign_in(&args.username, &args.password).await {
        return Err(SIGN_IN_FAILED.into());
    }
    print_signed_in(&store, format)
}

/// Run the signin-biometric command
pub async fn signin_biometric(
    config: &StoreConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config).await?;
    if !store.can_offer_biometric_sign_in() {
        return Err("Biometric authentication is not available.".into());
    }
    if !store.sign_in_with_biometric().await {
        return Err(BIOMETRIC_FAILED.into());
    }
    print_signed_in(&store, format)
}

/// Run the signout command
pub async fn signout(
    config: &StoreConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config).await?;
    let was = store.current_user().map(|u| u.username.clone());
    store.sign_out().await;

    match format {
        OutputFormat::Human => match was {
            Some(username) => println!("Signed out {username}."),
            None => println!("Nobody was signed in."),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({ "signedOut": was });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the whoami command
pub async fn whoami(
    config: &StoreConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config).await?;
    match format {
        OutputFormat::Human => match store.current_user() {
            Some(user) => println!("{}", user.username),
            None => println!("Not signed in."),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({ "user": store.current_user().map(user_json) });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

fn print_signed_in(
    store: &gatehouse::AccountStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            if let Some(user) = store.current_user() {
                println!("Signed in as {}.", user.username);
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({ "user": store.current_user().map(user_json) });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
