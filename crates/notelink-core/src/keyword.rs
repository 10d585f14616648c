//! Link targets searched for in note bodies

use std::fmt;

use crate::error::{MentionError, MentionResult};

/// Scheme prefix of links between notes
pub const NOTE_LINK_SCHEME: &str = ":/";

/// Whether `rest`, the text right after an element-qualified id, closes the reference
pub(crate) fn ends_reference(rest: &str) -> bool {
    rest.chars()
        .next()
        .map_or(true, |c| c == ')' || c.is_whitespace())
}

/// A note id, optionally qualified with an element id as `noteId#elementId`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword {
    raw: String,
    hash: Option<usize>,
}

impl Keyword {
    /// Validate a keyword; an empty keyword or an empty note id is rejected
    pub fn parse(raw: &str) -> MentionResult<Self> {
        let hash = raw.find('#');
        if raw.is_empty() || hash == Some(0) {
            return Err(MentionError::EmptyKeyword);
        }
        Ok(Self {
            raw: raw.to_string(),
            hash,
        })
    }

    /// Element-qualified keyword for `note_id` and `element_id`
    pub fn for_element(note_id: &str, element_id: &str) -> MentionResult<Self> {
        Self::parse(&format!("{note_id}#{element_id}"))
    }

    /// The keyword as given
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Note part of the keyword
    pub fn note_id(&self) -> &str {
        match self.hash {
            Some(hash) => &self.raw[..hash],
            None => &self.raw,
        }
    }

    /// Element part of the keyword, if qualified
    pub fn element_id(&self) -> Option<&str> {
        self.hash.map(|hash| &self.raw[hash + 1..])
    }

    /// Whether the keyword already names an element
    pub fn is_element_qualified(&self) -> bool {
        self.hash.is_some()
    }

    /// Whether a link destination points at this keyword
    ///
    /// An element-qualified keyword must end where the reference ends, so
    /// `abc#sec1` does not match `:/abc#sec10`.
    pub fn matches_url(&self, url: &str) -> bool {
        url.strip_prefix(NOTE_LINK_SCHEME).is_some_and(|target| {
            target
                .match_indices(self.raw.as_str())
                .any(|(index, found)| {
                    !self.is_element_qualified()
                        || ends_reference(&target[index + found.len()..])
                })
        })
    }

    /// Element a matching link jumps to, beyond what the keyword names
    ///
    /// Everything after the first `#` of the destination, or the empty
    /// string when the keyword is element-qualified itself.
    pub fn derive_element_id<'u>(&self, url: &'u str) -> &'u str {
        if self.is_element_qualified() {
            return "";
        }
        url.split_once('#').map_or("", |(_, element)| element)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
