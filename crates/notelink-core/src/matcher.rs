//! Locating links to a keyword inside a parsed note

use notelink_parser::{NodeId, SyntaxTree};

use crate::error::{MentionError, MentionResult};
use crate::keyword::Keyword;

/// A link pointing at the keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Link node in the tree it was found in
    pub node: NodeId,
    /// Byte offset where the link syntax starts
    pub start: usize,
    /// Byte offset just past the link syntax
    pub end: usize,
    /// Visible label, entities decoded
    pub text: String,
    /// Element the link jumps to beyond the keyword; empty when none
    pub element_id: String,
    /// Whether this is the link a context window was grown from
    pub is_main: bool,
}

/// Every link whose destination points at `keyword`, in document order
///
/// A matching link must be labelled with plain text; anything else (an
/// emphasized or empty label) fails with [`MentionError::MalformedLink`].
pub fn find_links(tree: &SyntaxTree, keyword: &Keyword) -> MentionResult<Vec<LinkMatch>> {
    let mut matches = Vec::new();

    for (id, node) in tree.links() {
        let Some(url) = node.url() else { continue };
        if !keyword.matches_url(url) {
            continue;
        }

        let text = tree
            .children(id)
            .first()
            .and_then(|&label| tree.node(label).text())
            .ok_or_else(|| MentionError::malformed_link(url, node.span.start))?;

        matches.push(LinkMatch {
            node: id,
            start: node.span.start,
            end: node.span.end,
            text: text.to_string(),
            element_id: keyword.derive_element_id(url).to_string(),
            is_main: false,
        });
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notelink_parser::{CmarkParser, MarkdownParser};

    fn links_in(source: &str, keyword: &str) -> MentionResult<Vec<LinkMatch>> {
        let tree = CmarkParser::new().parse(source)?;
        find_links(&tree, &Keyword::parse(keyword)?)
    }

    #[test]
    fn test_finds_matching_links_in_order() {
        let source = "[a](:/abc123) [b](:/def456)\n\n- [c](:/abc123#sec1)";
        let matches = links_in(source, "abc123").unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "a");
        assert_eq!((matches[0].start, matches[0].end), (0, 13));
        assert_eq!(matches[1].text, "c");
        assert_eq!(matches[1].element_id, "sec1");
        assert!(matches[0].start < matches[1].start);
        assert!(matches.iter().all(|m| !m.is_main));
    }

    #[test]
    fn test_incidental_substrings_are_ignored() {
        let source = "Plain :/abc123 text, `[x](:/abc123)` and [web](https://x.org/abc123).";
        assert!(links_in(source, "abc123").unwrap().is_empty());
    }

    #[test]
    fn test_element_keyword_yields_no_element_id() {
        let matches = links_in("[s](:/abc123#sec1)", "abc123#sec1").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].element_id, "");
    }

    #[test]
    fn test_non_text_label_is_malformed() {
        let result = links_in("see [**bold**](:/abc123)", "abc123");
        assert!(matches!(
            result,
            Err(MentionError::MalformedLink { offset: 4, .. })
        ));

        let result = links_in("see [](:/abc123)", "abc123");
        assert!(matches!(result, Err(MentionError::MalformedLink { .. })));
    }

    #[test]
    fn test_non_matching_malformed_link_is_ignored() {
        let matches = links_in("[**x**](:/other) [ok](:/abc123)", "abc123").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "ok");
    }
}
