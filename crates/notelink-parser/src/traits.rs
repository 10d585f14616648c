//! Parser abstraction consumed by the mention engine

use crate::error::ParserResult;
use crate::tree::SyntaxTree;

/// Markdown parser producing span-annotated syntax trees
///
/// Implementations are stateless: a single instance is built once and shared
/// by reference (usually behind an `Arc`) across every extraction call.
pub trait MarkdownParser: Send + Sync {
    /// Parse `source` into a syntax tree whose spans index into `source`
    fn parse(&self, source: &str) -> ParserResult<SyntaxTree>;

    /// Describe this parser
    fn capabilities(&self) -> ParserCapabilities;
}

/// Static description of a parser implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserCapabilities {
    /// Implementation name
    pub name: &'static str,
    /// Implementation version
    pub version: &'static str,
    /// Largest source accepted, in bytes
    pub max_source_size: Option<usize>,
    /// Whether GFM tables are recognized
    pub tables: bool,
    /// Whether footnotes are recognized
    pub footnotes: bool,
}
