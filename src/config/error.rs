//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Storage base directory must not be empty")]
    EmptyBaseDir,

    #[error("Profile key must not be empty")]
    EmptyProfileKey,

    #[error("Profile key must not contain path separators: {0}")]
    InvalidProfileKey(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
