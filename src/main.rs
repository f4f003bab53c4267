// src/main.rs

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

mod cli;

use cli::{CliError, Cli, Commands};
use sheetrows::settings::{io::load_settings, AppSettings};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    tracing_subscriber::fmt()
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hyper=warn,reqwest=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Could not load settings, using defaults: {}", e);
            AppSettings::default()
        }
    };

    let result = match &cli.command {
        Commands::Update(args) => cli::update_rows::update(args, &settings).await,
        Commands::Preview(args) => cli::update_rows::preview(args, &settings).await,
        Commands::Validate(args) => cli::update_rows::validate_only(args),
        Commands::StoreToken { token } => cli::store_token::run(token),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Update(e)) => {
            let report = e.report();
            match serde_json::to_string(&report) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}", e),
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
