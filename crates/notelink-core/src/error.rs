//! Mention extraction error types

use notelink_parser::ParserError;
use thiserror::Error;

/// Mention extraction error type
#[derive(Debug, Error)]
pub enum MentionError {
    /// Keyword is empty or names no note
    #[error("Keyword must name a note")]
    EmptyKeyword,

    /// A matching link whose label is not plain text
    #[error("Link to {url} at byte {offset} has no plain-text label")]
    MalformedLink {
        /// Destination of the offending link
        url: String,
        /// Byte offset of the link in the parsed text
        offset: usize,
    },

    /// The markdown parser rejected the note
    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    /// The link pattern for the regex strategy could not be built
    #[error("Invalid link pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Specialized Result type for mention extraction
pub type MentionResult<T> = Result<T, MentionError>;

impl MentionError {
    /// Create a malformed link error
    pub fn malformed_link(url: impl Into<String>, offset: usize) -> Self {
        Self::MalformedLink {
            url: url.into(),
            offset,
        }
    }

    /// Whether the failure is confined to one note
    ///
    /// Recoverable errors drop the offending note from a referrer batch;
    /// the rest are caller mistakes and are returned immediately.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::EmptyKeyword | Self::InvalidPattern(_) => false,
            Self::MalformedLink { .. } => true,
            Self::Parser(err) => err.is_recoverable(),
        }
    }
}
