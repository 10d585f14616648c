//! Parser-free mention counting
//!
//! Used when excerpts are disabled: only the number of references matters,
//! and a substring scan is linear in the note size.

use crate::keyword::{ends_reference, NOTE_LINK_SCHEME};

/// Number of references to `target_id` in raw `content`
///
/// A bare note id counts every `:/<id>` occurrence, element links included.
/// An element-qualified id only counts occurrences that end right after the
/// element id, so `abc#sec1` does not count `:/abc#sec10`.
pub fn count_mentions(target_id: &str, content: &str) -> usize {
    let needle = format!("{NOTE_LINK_SCHEME}{target_id}");
    if !target_id.contains('#') {
        return content.matches(needle.as_str()).count();
    }

    content
        .match_indices(needle.as_str())
        .filter(|(index, _)| ends_reference(&content[index + needle.len()..]))
        .count()
}
