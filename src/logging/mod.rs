// file: src/logging/mod.rs
// version: 1.0.0
// guid: e8a27c49-0b63-4f58-91c2-7d05f3e6b814

//! Logging system for the question bank scaffolding agent

pub mod logger;

pub use logger::init_logger;
