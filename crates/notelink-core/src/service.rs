//! Mention extraction over whole notes and batches of referrers

use std::sync::Arc;

use notelink_config::{MatchStrategy, ReferrerConfig};
use notelink_parser::MarkdownParser;

use crate::count::count_mentions;
use crate::error::MentionResult;
use crate::fragment::{extract_fragment, link_syntax_overhead};
use crate::keyword::Keyword;
use crate::matcher::find_links;
use crate::model::{Note, Referrer};
use crate::pattern::mentions_with_pattern;
use crate::render::{render_mention, MarkStyle};

/// Runs link matching, fragment extraction and rendering for notes
///
/// Holds no per-call state; one instance can serve every request.
#[derive(Clone)]
pub struct MentionService {
    parser: Arc<dyn MarkdownParser>,
    strategy: MatchStrategy,
    style: MarkStyle,
}

impl MentionService {
    /// Create a service using the tree-based strategy and default markup
    pub fn new(parser: Arc<dyn MarkdownParser>) -> Self {
        Self {
            parser,
            strategy: MatchStrategy::Syntax,
            style: MarkStyle::default(),
        }
    }

    /// Create a service with strategy and markup from `config`
    pub fn from_config(parser: Arc<dyn MarkdownParser>, config: &ReferrerConfig) -> Self {
        Self {
            parser,
            strategy: config.strategy,
            style: MarkStyle::from(config),
        }
    }

    /// Builder-style: set the matching strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder-style: set the markup
    #[must_use]
    pub fn with_style(mut self, style: MarkStyle) -> Self {
        self.style = style;
        self
    }

    /// One mention per reference to `keyword` in `content`
    ///
    /// With `text_length == 0` the content is never parsed: references are
    /// counted and each mention is the empty string.
    pub fn extract_mentions(
        &self,
        keyword: &Keyword,
        content: &str,
        text_length: usize,
    ) -> MentionResult<Vec<String>> {
        if text_length == 0 {
            return Ok(vec![String::new(); count_mentions(keyword.as_str(), content)]);
        }

        match self.strategy {
            MatchStrategy::Syntax => self.mentions_with_syntax(keyword, content, text_length),
            MatchStrategy::Regex => {
                mentions_with_pattern(keyword, content, text_length, &self.style)
            }
        }
    }

    fn mentions_with_syntax(
        &self,
        keyword: &Keyword,
        content: &str,
        text_length: usize,
    ) -> MentionResult<Vec<String>> {
        let tree = self.parser.parse(content)?;
        let seeds = find_links(&tree, keyword)?;
        let budget = text_length + link_syntax_overhead(keyword);
        let mut mentions = Vec::with_capacity(seeds.len());

        for seed in &seeds {
            let fragment = extract_fragment(&tree, content, seed, budget);
            let rendered = render_mention(
                self.parser.as_ref(),
                &fragment.source_text,
                keyword,
                fragment.prefix_length,
                &self.style,
            )?;

            if rendered.main_mark_found {
                mentions.push(rendered.text);
            } else {
                tracing::debug!(
                    keyword = %keyword,
                    offset = seed.start,
                    "dropping fragment without a main match"
                );
            }
        }

        Ok(mentions)
    }

    /// Notes among `candidates` that reference `target_id`, with their mentions
    ///
    /// A note that fails to process, or yields no mentions, is left out; an
    /// empty `target_id` is an error.
    pub fn search_referrers_of_element(
        &self,
        target_id: &str,
        candidates: Vec<Note>,
        text_length: usize,
    ) -> MentionResult<Vec<Referrer>> {
        let keyword = Keyword::parse(target_id)?;
        let mut referrers = Vec::with_capacity(candidates.len());

        for note in candidates {
            match self.extract_mentions(&keyword, &note.body, text_length) {
                Ok(mentions) if mentions.is_empty() => {}
                Ok(mentions) => referrers.push(Referrer { note, mentions }),
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(
                        note_id = %note.id,
                        keyword = %keyword,
                        error = %err,
                        "skipping referrer that could not be processed"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Ok(referrers)
    }
}

impl std::fmt::Debug for MentionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MentionService")
            .field("parser", &self.parser.capabilities().name)
            .field("strategy", &self.strategy)
            .field("style", &self.style)
            .finish()
    }
}
