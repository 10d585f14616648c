//! HTML escaping for extracted note text

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TEXT_ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{00A0}-\x{9999}<>&]").expect("text escape regex"));

static ATTRIBUTE_ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\x{00A0}-\x{9999}<>&"']"#).expect("attribute escape regex"));

fn numeric_reference(caps: &Captures<'_>) -> String {
    caps[0]
        .chars()
        .map(|c| format!("&#{};", c as u32))
        .collect()
}

/// Replace `<`, `>`, `&` and characters in U+00A0..=U+9999 with numeric references
///
/// Escaping is per character, so the escaped length of a prefix is a valid
/// offset into the escaped whole.
pub fn escape_html(text: &str) -> String {
    TEXT_ESCAPE_REGEX
        .replace_all(text, numeric_reference)
        .into_owned()
}

/// [`escape_html`] that also covers quotes, for attribute values
pub fn escape_attribute(text: &str) -> String {
    ATTRIBUTE_ESCAPE_REGEX
        .replace_all(text, numeric_reference)
        .into_owned()
}
