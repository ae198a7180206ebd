// file: src/cli/args.rs
// version: 1.1.0
// guid: 0d5a1b72-4c96-4fa3-eb10-8f2b9a4c6d35

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qbank-scaffold")]
#[command(about = "Workspace scaffolding and migration for the AI question bank pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bootstrap a fresh pipeline workspace
    Init {
        #[arg(short, long, default_value = ".", help = "Workspace root to scaffold")]
        root: String,

        #[arg(short, long, help = "Custom layout manifest (YAML)")]
        layout: Option<String>,

        #[arg(long, help = "Show what would be done without doing it")]
        dry_run: bool,

        #[arg(long, help = "Skip git init, venv creation, and pip install")]
        skip_env_setup: bool,

        #[arg(long, help = "Python interpreter used to create the venv")]
        python: Option<String>,
    },

    /// Migrate a legacy workspace to the consolidated layout
    Restructure {
        #[arg(short, long, default_value = ".", help = "Workspace root to migrate")]
        root: String,

        #[arg(short, long, help = "Custom layout manifest (YAML)")]
        layout: Option<String>,

        #[arg(long, help = "Show what would be done without doing it")]
        dry_run: bool,

        #[arg(short = 'y', long, help = "Delete the legacy bootstrap script without prompting")]
        yes: bool,

        #[arg(long, help = "Keep the legacy bootstrap script without prompting")]
        keep_legacy_script: bool,
    },

    /// Report workspace state against the expected layout
    Status {
        #[arg(short, long, default_value = ".", help = "Workspace root to inspect")]
        root: String,

        #[arg(short, long, help = "Custom layout manifest (YAML)")]
        layout: Option<String>,

        #[arg(short, long, help = "Machine-readable output")]
        json: bool,
    },

    /// Check external tool prerequisites
    CheckPrereqs,
}
