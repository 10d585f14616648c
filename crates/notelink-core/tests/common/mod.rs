//! Shared helpers for notelink-core integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use notelink_core::MentionService;
use notelink_parser::{CmarkParser, MarkdownParser, ParserCapabilities, ParserResult, SyntaxTree};

/// `CmarkParser` that counts how often it is invoked
#[derive(Debug, Default)]
pub struct CountingParser {
    inner: CmarkParser,
    calls: AtomicUsize,
}

impl CountingParser {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MarkdownParser for CountingParser {
    fn parse(&self, source: &str) -> ParserResult<SyntaxTree> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.parse(source)
    }

    fn capabilities(&self) -> ParserCapabilities {
        self.inner.capabilities()
    }
}

pub fn service() -> MentionService {
    MentionService::new(Arc::new(CmarkParser::new()))
}

pub fn counting_service() -> (MentionService, Arc<CountingParser>) {
    let parser = Arc::new(CountingParser::default());
    (MentionService::new(parser.clone()), parser)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
