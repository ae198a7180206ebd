// file: src/lib.rs
// version: 1.0.0
// guid: 7d2e4b91-6a05-4c38-8f1b-9e03a7d5c216

//! # Question Bank Scaffold
//!
//! Workspace scaffolding and migration agent for the AI question bank
//! pipeline. Bootstraps a fresh pipeline workspace (directory tree,
//! placeholder files, credential templates, git repository, Python virtual
//! environment) and migrates legacy workspaces to the current layout.
//!
//! The pipeline itself (PDF parsing, question extraction, review UI) is a
//! separate Python project; this agent only prepares the workspace it runs in.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod steps;
pub mod utils;
pub mod workspace;

pub use error::{Result, ScaffoldError};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
