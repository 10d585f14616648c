//! Growing a context window around a matched link
//!
//! The window starts as the link's own source text and absorbs whole
//! sibling nodes, previous and next alternately, while the result stays
//! under the budget. When a level runs out of siblings the enclosing node
//! becomes the target and its siblings are tried next. The first sibling
//! that does not fit stops growth on both sides and at every level above.

use std::ops::Range;

use notelink_parser::SyntaxTree;

use crate::escape::escape_html;
use crate::keyword::Keyword;
use crate::matcher::LinkMatch;

/// Source slice around a seed link, escaped for HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Escaped markdown of the window
    pub source_text: String,
    /// Offset of the seed link's start within `source_text`
    pub prefix_length: usize,
    /// Byte span of the window in the original source
    pub span: Range<usize>,
}

/// Characters of link syntax that never show up in an excerpt: `[](:/<keyword>)`
pub fn link_syntax_overhead(keyword: &Keyword) -> usize {
    "[](:/)".len() + keyword.as_str().chars().count()
}

fn char_len(source: &str, span: Range<usize>) -> usize {
    source[span].chars().count()
}

/// Grow a window around `seed` until it reaches `budget` characters
pub fn extract_fragment(
    tree: &SyntaxTree,
    source: &str,
    seed: &LinkMatch,
    budget: usize,
) -> Fragment {
    let mut start = seed.start;
    let mut end = seed.end;
    let mut target = seed.node;
    let mut over = false;

    while !over {
        let Some((siblings, index)) = tree.siblings(target) else {
            break;
        };
        let mut previous = index.checked_sub(1);
        let mut next = index + 1;

        loop {
            let mut grew = false;

            if let Some(i) = previous {
                let candidate = tree.node(siblings[i]).span.start.min(start);
                if char_len(source, candidate..end) < budget {
                    start = candidate;
                    previous = i.checked_sub(1);
                    grew = true;
                } else {
                    over = true;
                }
            }

            if let Some(&sibling) = siblings.get(next) {
                let candidate = tree.node(sibling).span.end.max(end);
                if char_len(source, start..candidate) < budget {
                    end = candidate;
                    next += 1;
                    grew = true;
                } else {
                    over = true;
                }
            }

            if over || !grew {
                break;
            }
        }

        match tree.parent(target) {
            Some(parent) => target = parent,
            None => break,
        }
    }

    Fragment {
        source_text: escape_html(&source[start..end]),
        prefix_length: escape_html(&source[start..seed.start]).len(),
        span: start..end,
    }
}
