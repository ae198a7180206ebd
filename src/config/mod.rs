// file: src/config/mod.rs
// version: 1.0.0
// guid: a9c4e1f7-2d58-4b36-90ae-6f13c8d7b502

//! Configuration module for the question bank scaffolding agent
//!
//! Defines the expected workspace layout and loads custom layout manifests.

pub mod layout;
pub mod loader;
pub mod templates;

pub use layout::WorkspaceLayout;
pub use loader::LayoutLoader;
