//! Notelink Markdown Parser
//!
//! Parses markdown source into a small arena-backed syntax tree. Every node
//! keeps the byte span it occupies in the source and a pointer to its
//! parent, which is all the mention engine needs to locate links and grow a
//! context window around them.
//!
//! The tree only distinguishes three shapes of node (links, plain text and
//! everything else), so consumers never depend on the internal types of the
//! parser library that produced it.

pub mod error;
pub mod pulldown;
pub mod traits;
pub mod tree;

pub use error::{ParserError, ParserResult};
pub use pulldown::CmarkParser;
pub use traits::{MarkdownParser, ParserCapabilities};
pub use tree::{NodeId, NodeKind, SyntaxNode, SyntaxTree, TreeBuilder};
