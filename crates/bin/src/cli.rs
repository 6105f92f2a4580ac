//! CLI argument definitions for the Gatehouse binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Storage backend type
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Backend {
    /// One JSON file per key in the data directory (default)
    File,
    /// Nothing is written; state is lost when the command exits
    Inmemory,
}

/// How the simulated biometric sensor answers prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BiometricMode {
    /// No sensor on this device
    #[value(name = "none")]
    Absent,
    /// Every prompt is accepted
    Accept,
    /// Every prompt is cancelled
    Deny,
    /// The sensor errors on every call
    Error,
}

/// Which sensor the simulated device reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SensorKind {
    TouchId,
    FaceId,
    Biometrics,
}

/// Where account state lives and which sensor the device has.
#[derive(clap::Args, Debug)]
pub struct StoreConfig {
    /// Directory holding auth-storage.json
    #[arg(short = 'D', long, global = true, env = "GATEHOUSE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage backend to use
    #[arg(
        long,
        global = true,
        default_value = "file",
        env = "GATEHOUSE_BACKEND"
    )]
    pub backend: Backend,

    /// Simulated biometric sensor behaviour
    #[arg(
        long,
        global = true,
        default_value = "none",
        env = "GATEHOUSE_BIOMETRIC"
    )]
    pub biometric: BiometricMode,

    /// Sensor kind reported by the simulated device
    #[arg(long, global = true, default_value = "biometrics")]
    pub biometric_kind: SensorKind,
}

/// Gatehouse local account shell
#[derive(Parser, Debug)]
#[command(name = "gatehouse")]
#[command(about = "Gatehouse: local accounts with biometric sign-in")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreConfig,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign it in
    Signup(SignupArgs),
    /// Sign in with username and password
    Signin(SigninArgs),
    /// Sign in with the biometric sensor
    SigninBiometric,
    /// End the current session
    Signout,
    /// Show the signed-in account
    Whoami,
    /// List accounts on this device
    Users,
    /// Set the signed-in account's avatar from a file path or URI
    Avatar(AvatarArgs),
    /// Turn biometric sign-in on or off for the signed-in account
    Biometric {
        #[command(subcommand)]
        action: BiometricAction,
    },
    /// Show session and sensor status
    Status,
}

/// Arguments for the signup command
#[derive(clap::Args, Debug)]
pub struct SignupArgs {
    pub username: String,
    pub password: String,
    /// Password again
    pub verify_password: String,
}

/// Arguments for the signin command
#[derive(clap::Args, Debug)]
pub struct SigninArgs {
    pub username: String,
    pub password: String,
}

/// Arguments for the avatar command
#[derive(clap::Args, Debug)]
pub struct AvatarArgs {
    /// Local image path or an existing URI
    pub source: String,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum BiometricAction {
    Enable,
    Disable,
}
