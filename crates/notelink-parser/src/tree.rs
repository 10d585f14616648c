//! Arena-backed syntax tree
//!
//! Nodes live in a single `Vec` and refer to each other by index. Nodes are
//! appended in the order their opening syntax appears in the source, so the
//! arena order is exactly a pre-order (document order) traversal.

use std::ops::Range;

use crate::error::{ParserError, ParserResult};

/// Index of a node inside a [`SyntaxTree`]
pub type NodeId = usize;

/// The shapes of node the mention engine cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root, spanning the whole source
    Root,
    /// Inline link with its destination URL
    Link {
        /// Destination as written (after reference resolution)
        url: String,
    },
    /// Plain text run with entities and escapes already decoded
    Text {
        /// Decoded text
        value: String,
    },
    /// Any other block or inline element
    Container,
}

/// A node and its position in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// What the node is
    pub kind: NodeKind,
    /// Byte span in the parsed source
    pub span: Range<usize>,
    /// Enclosing node, `None` only for the root
    pub parent: Option<NodeId>,
    /// Child nodes in document order
    pub children: Vec<NodeId>,
}

impl SyntaxNode {
    /// Whether this node is a link
    pub fn is_link(&self) -> bool {
        matches!(self.kind, NodeKind::Link { .. })
    }

    /// Link destination, if this node is a link
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Link { url } => Some(url),
            _ => None,
        }
    }

    /// Text value, if this node is plain text
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { value } => Some(value),
            _ => None,
        }
    }
}

/// Parsed markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// Id of the root node
    pub const ROOT: NodeId = 0;

    /// The root node
    pub fn root(&self) -> &SyntaxNode {
        &self.nodes[Self::ROOT]
    }

    /// Look up a node
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id]
    }

    /// Number of nodes, root included, so never less than 1
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`
    ///
    /// Every tree is created with its root node, even for an empty source,
    /// and nodes are never removed. Use `children(SyntaxTree::ROOT)` to ask
    /// whether the document has any content.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parent of `id`
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Children of `id`
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// The children of `id`'s parent together with `id`'s position among them
    pub fn siblings(&self, id: NodeId) -> Option<(&[NodeId], usize)> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|&child| child == id)?;
        Some((siblings, index))
    }

    /// Every node in document order
    pub fn preorder(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.nodes.iter().enumerate()
    }

    /// Every link node in document order
    pub fn links(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.preorder().filter(|(_, node)| node.is_link())
    }
}

/// Incrementally assembles a [`SyntaxTree`] from start/leaf/end events
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    /// Start a tree for a source of `len` bytes
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![SyntaxNode {
                kind: NodeKind::Root,
                span: 0..len,
                parent: None,
                children: Vec::new(),
            }],
            open: vec![SyntaxTree::ROOT],
        }
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(SyntaxTree::ROOT)
    }

    fn push(&mut self, kind: NodeKind, span: Range<usize>) -> NodeId {
        let parent = self.current();
        let id = self.nodes.len();
        self.nodes.push(SyntaxNode {
            kind,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Open a node; subsequent nodes become its children until [`close`](Self::close)
    pub fn open(&mut self, kind: NodeKind, span: Range<usize>) -> NodeId {
        let id = self.push(kind, span);
        self.open.push(id);
        id
    }

    /// Close the innermost open node; the root itself is never closed
    pub fn close(&mut self) -> ParserResult<NodeId> {
        let [_, .., innermost] = self.open.as_slice() else {
            return Err(ParserError::unbalanced("end event without matching start"));
        };
        let id = *innermost;
        self.open.pop();
        Ok(id)
    }

    /// Add a childless node
    pub fn leaf(&mut self, kind: NodeKind, span: Range<usize>) -> NodeId {
        self.push(kind, span)
    }

    /// Add a text run, merging it into an immediately preceding text sibling
    ///
    /// Parsers split text at entities, escapes and emphasis delimiters that
    /// turned out not to be emphasis; a single run per stretch of text keeps
    /// link labels whole.
    pub fn text(&mut self, value: &str, span: Range<usize>) -> NodeId {
        let parent = self.current();
        if let Some(&last) = self.nodes[parent].children.last() {
            let node = &mut self.nodes[last];
            if let NodeKind::Text { value: existing } = &mut node.kind {
                existing.push_str(value);
                node.span.start = node.span.start.min(span.start);
                node.span.end = node.span.end.max(span.end);
                return last;
            }
        }
        self.push(
            NodeKind::Text {
                value: value.to_string(),
            },
            span,
        )
    }

    /// Finish the tree; every opened node must have been closed
    pub fn finish(self) -> ParserResult<SyntaxTree> {
        if self.open.len() != 1 {
            return Err(ParserError::unbalanced(format!(
                "{} node(s) left open",
                self.open.len() - 1
            )));
        }
        Ok(SyntaxTree { nodes: self.nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SyntaxTree {
        // "ab [c](:/x) d"
        let mut builder = TreeBuilder::new(13);
        builder.open(NodeKind::Container, 0..13);
        builder.text("ab ", 0..3);
        builder.open(
            NodeKind::Link {
                url: ":/x".to_string(),
            },
            3..11,
        );
        builder.text("c", 4..5);
        builder.close().unwrap();
        builder.text(" d", 11..13);
        builder.close().unwrap();
        builder.finish().unwrap()
    }

    #[test]
    fn test_parent_pointers_and_siblings() {
        let tree = sample();
        assert_eq!(tree.len(), 6);

        let (link_id, link) = tree.links().next().unwrap();
        assert_eq!(link.url(), Some(":/x"));
        assert_eq!(tree.parent(link_id), Some(1));

        let (siblings, index) = tree.siblings(link_id).unwrap();
        assert_eq!(siblings.len(), 3);
        assert_eq!(index, 1);
        assert!(tree.siblings(SyntaxTree::ROOT).is_none());
    }

    #[test]
    fn test_preorder_is_document_order() {
        let tree = sample();
        let starts: Vec<usize> = tree.preorder().map(|(_, n)| n.span.start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_adjacent_text_is_merged() {
        let mut builder = TreeBuilder::new(7);
        builder.text("a", 0..1);
        builder.text("<", 1..6);
        builder.text("b", 6..7);
        let tree = builder.finish().unwrap();

        assert_eq!(tree.children(SyntaxTree::ROOT).len(), 1);
        let text = tree.node(1);
        assert_eq!(text.text(), Some("a<b"));
        assert_eq!(text.span, 0..7);
    }

    #[test]
    fn test_empty_tree_still_holds_root() {
        let tree = TreeBuilder::new(0).finish().unwrap();
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert!(tree.children(SyntaxTree::ROOT).is_empty());
    }

    #[test]
    fn test_unbalanced_events_are_reported() {
        let mut builder = TreeBuilder::new(0);
        assert!(builder.close().is_err());
        assert!(builder.close().is_err());
        assert!(builder.finish().is_ok());

        let mut builder = TreeBuilder::new(4);
        let opened = builder.open(NodeKind::Container, 0..4);
        assert_eq!(builder.close(), Ok(opened));
        assert!(builder.close().is_err());

        let mut builder = TreeBuilder::new(4);
        builder.open(NodeKind::Container, 0..4);
        assert!(matches!(builder.finish(), Err(ParserError::Unbalanced(_))));
    }
}
