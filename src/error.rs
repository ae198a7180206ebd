// file: src/error.rs
// version: 1.0.0
// guid: 3f1c9a72-8b4d-4e06-9d2a-5c7e1f08b364

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Error types for the question bank scaffolding agent
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Workspace error: {0}")]
    WorkspaceError(String),

    #[error("Command failed: {0}")]
    CommandError(String),

    #[error("System error: {0}")]
    SystemError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl ScaffoldError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a new workspace error
    pub fn workspace(msg: impl Into<String>) -> Self {
        Self::WorkspaceError(msg.into())
    }

    /// Create a new command error
    pub fn command(msg: impl Into<String>) -> Self {
        Self::CommandError(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::SystemError(msg.into())
    }
}
