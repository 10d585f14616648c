//! Pulldown-cmark based markdown parser implementation

use pulldown_cmark::{Event, Options, Parser as CmarkEventParser, Tag};

use crate::error::{ParserError, ParserResult};
use crate::traits::{MarkdownParser, ParserCapabilities};
use crate::tree::{NodeKind, SyntaxTree, TreeBuilder};

/// Markdown parser using pulldown-cmark
#[derive(Debug, Clone)]
pub struct CmarkParser {
    options: Options,
    max_source_size: Option<usize>,
}

impl CmarkParser {
    /// Create a parser with GFM tables, strikethrough, task lists and footnotes
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);

        Self {
            options,
            max_source_size: Some(10 * 1024 * 1024),
        }
    }

    /// Create with custom max source size
    pub fn with_max_source_size(mut self, max_size: usize) -> Self {
        self.max_source_size = Some(max_size);
        self
    }

    fn lower_tag(tag: &Tag<'_>) -> NodeKind {
        match tag {
            Tag::Link { dest_url, .. } => NodeKind::Link {
                url: dest_url.to_string(),
            },
            _ => NodeKind::Container,
        }
    }
}

impl Default for CmarkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser for CmarkParser {
    fn parse(&self, source: &str) -> ParserResult<SyntaxTree> {
        if let Some(max) = self.max_source_size {
            if source.len() > max {
                return Err(ParserError::SourceTooLarge {
                    size: source.len(),
                    max,
                });
            }
        }

        let mut builder = TreeBuilder::new(source.len());
        for (event, range) in CmarkEventParser::new_ext(source, self.options).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    builder.open(Self::lower_tag(&tag), range);
                }
                Event::End(_) => {
                    builder.close()?;
                }
                Event::Text(text) => {
                    builder.text(&text, range);
                }
                _ => {
                    builder.leaf(NodeKind::Container, range);
                }
            }
        }

        let tree = builder.finish()?;
        tracing::trace!(bytes = source.len(), nodes = tree.len(), "parsed markdown");
        Ok(tree)
    }

    fn capabilities(&self) -> ParserCapabilities {
        ParserCapabilities {
            name: "CmarkParser",
            version: env!("CARGO_PKG_VERSION"),
            max_source_size: self.max_source_size,
            tables: self.options.contains(Options::ENABLE_TABLES),
            footnotes: self.options.contains(Options::ENABLE_FOOTNOTES),
        }
    }
}
