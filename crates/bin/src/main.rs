use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backend;
mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

#[tokio::main]
async fn main() {
    // Initialize tracing on stderr so stdout stays parseable with --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gatehouse=info".parse().expect("valid directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_flag(cli.json);

    if let Err(e) = run(&cli, format).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let store = &cli.store;
    match &cli.command {
        Commands::Signup(args) => commands::auth::signup(store, args, format).await,
        Commands::Signin(args) => commands::auth::signin(store, args, format).await,
        Commands::SigninBiometric => commands::auth::signin_biometric(store, format).await,
        Commands::Signout => commands::auth::signout(store, format).await,
        Commands::Whoami => commands::auth::whoami(store, format).await,
        Commands::Users => commands::status::users(store, format).await,
        Commands::Avatar(args) => commands::profile::avatar(store, args, format).await,
        Commands::Biometric { action } => commands::profile::biometric(store, *action, format).await,
        Commands::Status => commands::status::status(store, format).await,
    }
}
