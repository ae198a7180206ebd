// file: src/main.rs
// version: 1.0.0
// guid: 2f7c3d94-6eb8-41c5-ad32-0b4d1c6e8f57

//! Question Bank Scaffold - Main entry point

use clap::Parser;
use qbank_scaffold::{
    cli::{args::Cli, commands::*},
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    // Set up signal handling for graceful shutdown
    let shutdown_signal = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting...");
    };

    let command_future = async {
        match cli.command {
            qbank_scaffold::cli::args::Commands::Init {
                root,
                layout,
                dry_run,
                skip_env_setup,
                python,
            } => init_command(&root, layout, dry_run, skip_env_setup, python).await,
            qbank_scaffold::cli::args::Commands::Restructure {
                root,
                layout,
                dry_run,
                yes,
                keep_legacy_script,
            } => restructure_command(&root, layout, dry_run, yes, keep_legacy_script).await,
            qbank_scaffold::cli::args::Commands::Status { root, layout, json } => {
                status_command(&root, layout, json).await
            }
            qbank_scaffold::cli::args::Commands::CheckPrereqs => check_prereqs_command().await,
        }
    };

    // Run command with signal handling
    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
