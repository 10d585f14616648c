//! Configuration error types

use std::io;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML could not be parsed into the config types
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config parsed but violates a constraint
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Specialized Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a validation error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
