//! Regex fallback for locating links without a markdown parser
//!
//! Labels containing brackets (`[aa[b]ccc](:/id)`) are not recognized, but
//! main-match selection and markup are identical to the tree-based path.

use std::ops::Range;

use regex::Regex;

use crate::error::MentionResult;
use crate::escape::escape_html;
use crate::fragment::Fragment;
use crate::keyword::Keyword;
use crate::render::{designate_main, MarkStyle, RenderedMention};

/// `[label](:/<keyword>...)` with the label free of brackets
///
/// An element-qualified keyword may only be followed by a link title.
pub fn link_pattern(keyword: &Keyword) -> MentionResult<Regex> {
    let escaped = regex::escape(keyword.as_str());
    let pattern = if keyword.is_element_qualified() {
        format!(r"\[([^\[\]]*)\]\(:/({escaped})(?:\s[^)]*)?\)")
    } else {
        format!(r"\[([^\[\]]*)\]\(:/({escaped}.*?)\)")
    };
    Ok(Regex::new(&pattern)?)
}

fn back_chars(content: &str, from: usize, count: usize) -> usize {
    if count == 0 {
        return from;
    }
    content[..from]
        .char_indices()
        .rev()
        .nth(count - 1)
        .map_or(0, |(index, _)| index)
}

fn forward_chars(content: &str, from: usize, count: usize) -> usize {
    content[from..]
        .char_indices()
        .nth(count)
        .map_or(content.len(), |(index, _)| from + index)
}

/// Window of `ceil(text_length / 2)` characters on each side of `occurrence`
pub fn window_fragment(content: &str, occurrence: Range<usize>, text_length: usize) -> Fragment {
    let half = text_length.div_ceil(2);
    let start = back_chars(content, occurrence.start, half);
    let end = forward_chars(content, occurrence.end, half);

    Fragment {
        source_text: escape_html(&content[start..end]),
        prefix_length: escape_html(&content[start..occurrence.start]).len(),
        span: start..end,
    }
}

/// Highlight every pattern match in an escaped fragment
pub fn render_with_pattern(
    pattern: &Regex,
    fragment_text: &str,
    keyword: &Keyword,
    prefix_length: usize,
    style: &MarkStyle,
) -> RenderedMention {
    let captures: Vec<_> = pattern.captures_iter(fragment_text).collect();
    let main = designate_main(
        prefix_length,
        captures.iter().filter_map(|caps| caps.get(0)).map(|m| m.end()),
    );

    let mut out = String::with_capacity(fragment_text.len());
    let mut offset = 0;
    for (index, caps) in captures.iter().enumerate() {
        let (Some(whole), Some(label), Some(target)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        out.push_str(&fragment_text[offset..whole.start()]);
        style.write_mark(
            &mut out,
            label.as_str(),
            keyword.derive_element_id(target.as_str()),
            main == Some(index),
        );
        offset = whole.end();
    }
    out.push_str(&fragment_text[offset..]);

    RenderedMention {
        text: out.trim().to_string(),
        main_mark_found: main.is_some(),
    }
}

/// Regex counterpart of the tree pipeline: one mention per matching link
pub fn mentions_with_pattern(
    keyword: &Keyword,
    content: &str,
    text_length: usize,
    style: &MarkStyle,
) -> MentionResult<Vec<String>> {
    let pattern = link_pattern(keyword)?;
    let mut mentions = Vec::new();

    for occurrence in pattern.find_iter(content) {
        let fragment = window_fragment(content, occurrence.range(), text_length);
        let rendered = render_with_pattern(
            &pattern,
            &fragment.source_text,
            keyword,
            fragment.prefix_length,
            style,
        );
        if rendered.main_mark_found {
            mentions.push(rendered.text);
        } else {
            tracing::debug!(
                keyword = %keyword,
                offset = occurrence.start(),
                "dropping fragment without a main match"
            );
        }
    }

    Ok(mentions)
}
