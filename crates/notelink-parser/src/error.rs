//! Parser error types

use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// Source exceeds the configured size limit
    #[error("Source too large: {size} bytes (max {max} bytes)")]
    SourceTooLarge {
        /// Actual source size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Event stream closed a node that was never opened, or left nodes open
    #[error("Unbalanced syntax tree: {0}")]
    Unbalanced(String),
}

/// Specialized Result type for parser operations
pub type ParserResult<T> = Result<T, ParserError>;

impl ParserError {
    /// Create an unbalanced tree error
    pub fn unbalanced(msg: impl Into<String>) -> Self {
        Self::Unbalanced(msg.into())
    }

    /// Whether the caller can skip the offending source and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SourceTooLarge { .. } | Self::Unbalanced(_))
    }
}
