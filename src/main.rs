//! plugin-lifecycle - manage UI plugins and API extension services
//!
//! Lists, enables, disables, deletes, re-scopes and publishes entities on a
//! cloud director instance in confirmed batches.

#![allow(missing_docs)]

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let dotenv = dotenvy::dotenv();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {:?}", path);
    }
    debug!(build = %plugin_lifecycle::build_info(), "Starting");

    let cli = cli::Cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
