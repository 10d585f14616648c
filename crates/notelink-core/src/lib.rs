//! Notelink Core
//!
//! Finds every markdown link in a note that points at a target note (or at
//! an element inside it) and turns each one into a short HTML excerpt for a
//! backlinks list:
//!
//! 1. [`matcher`] locates matching links in a parsed tree.
//! 2. [`fragment`] grows a context window around each link, one sibling
//!    node at a time, until the excerpt budget is spent.
//! 3. [`render`] re-parses the window, works out which link is the one the
//!    window was grown from, and highlights it.
//! 4. [`service`] runs the pipeline over a batch of candidate notes.
//!
//! [`search`] wires the service to an external [`NoteSource`] for referrer
//! and quick-link searches.

pub mod count;
pub mod error;
pub mod escape;
pub mod fragment;
pub mod keyword;
pub mod matcher;
pub mod model;
pub mod notebook;
pub mod pattern;
pub mod render;
pub mod search;
pub mod service;
pub mod source;

pub use count::count_mentions;
pub use error::{MentionError, MentionResult};
pub use fragment::{extract_fragment, link_syntax_overhead, Fragment};
pub use keyword::Keyword;
pub use matcher::{find_links, LinkMatch};
pub use model::{Note, Notebook, Referrer, SearchedNote};
pub use notebook::NotebookIndex;
pub use render::{render_mention, MarkStyle, RenderedMention};
pub use search::ReferrerSearch;
pub use service::MentionService;
pub use source::{NoteSource, Page, SourceError, SourceResult};
