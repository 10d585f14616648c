//! The host application's note store, as seen by referrer search

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Note, Notebook, SearchedNote};

/// Failure reported by a [`NoteSource`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The requested note does not exist
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Any other backend failure
    #[error("Note source error: {0}")]
    Backend(String),
}

/// Result type for note source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Whether another page follows
    pub has_more: bool,
}

impl<T> Page<T> {
    /// The last page of a listing
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            has_more: false,
        }
    }
}

/// Search and fetch access to notes
///
/// Pages are numbered from 1.
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// Notes matching a host search filter
    async fn search(&self, query: &str, page: usize) -> SourceResult<Page<SearchedNote>>;

    /// A note with its body
    async fn note(&self, id: &str) -> SourceResult<Note>;

    /// Most recently updated notes
    async fn recent_notes(&self, limit: usize) -> SourceResult<Vec<SearchedNote>>;

    /// Top-level notebooks with nested children
    async fn notebooks(&self, page: usize) -> SourceResult<Page<Notebook>>;
}
