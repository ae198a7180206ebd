// file: src/cli/mod.rs
// version: 1.0.0
// guid: 9c4f0a61-3b85-4ef2-da09-7e1a8f3b5c24

//! Command line interface for the question bank scaffolding agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
