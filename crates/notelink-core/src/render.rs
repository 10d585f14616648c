//! Turning a context fragment into a highlighted HTML mention

use notelink_config::{
    ReferrerConfig, DEFAULT_JUMP_ICON, DEFAULT_MAIN_MARK_CLASS, MENTION_MARK_CLASS,
};
use notelink_parser::MarkdownParser;

use crate::error::MentionResult;
use crate::escape::{escape_attribute, escape_html};
use crate::keyword::Keyword;
use crate::matcher::{find_links, LinkMatch};

/// Markup choices for highlighted links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkStyle {
    /// Class of the main match `<mark>`
    pub main_class: String,
    /// Markup inside the jump-to-element `<button>`
    pub jump_icon: String,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            main_class: DEFAULT_MAIN_MARK_CLASS.to_string(),
            jump_icon: DEFAULT_JUMP_ICON.to_string(),
        }
    }
}

impl From<&ReferrerConfig> for MarkStyle {
    fn from(config: &ReferrerConfig) -> Self {
        Self {
            main_class: config.main_mark_class.clone(),
            jump_icon: config.jump_icon.clone(),
        }
    }
}

impl MarkStyle {
    /// Append the `<mark>` for one link; `label_html` must already be escaped
    pub(crate) fn write_mark(
        &self,
        out: &mut String,
        label_html: &str,
        element_id: &str,
        is_main: bool,
    ) {
        let class = if is_main {
            self.main_class.as_str()
        } else {
            MENTION_MARK_CLASS
        };
        out.push_str("<mark class=\"");
        out.push_str(class);
        out.push_str("\">");
        out.push_str(label_html);
        if is_main && !element_id.is_empty() {
            out.push_str("<button data-note-link-element-id=\"");
            out.push_str(&escape_attribute(element_id));
            out.push_str("\">");
            out.push_str(&self.jump_icon);
            out.push_str("</button>");
        }
        out.push_str("</mark>");
    }
}

/// A rendered fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMention {
    /// Trimmed HTML with every matching link highlighted
    pub text: String,
    /// Whether the link the fragment was grown from was identified
    pub main_mark_found: bool,
}

/// Index of the first link, in order, whose end reaches `prefix_length`
pub(crate) fn designate_main(
    prefix_length: usize,
    ends: impl IntoIterator<Item = usize>,
) -> Option<usize> {
    ends.into_iter().position(|end| end >= prefix_length)
}

/// Re-parse an escaped fragment and highlight the links to `keyword` in it
///
/// Text outside the links is copied verbatim. Links ahead of the seed that
/// were pulled in as context are highlighted plainly; the seed gets the main
/// class and, when it points at a specific element, a jump control.
pub fn render_mention(
    parser: &dyn MarkdownParser,
    fragment_text: &str,
    keyword: &Keyword,
    prefix_length: usize,
    style: &MarkStyle,
) -> MentionResult<RenderedMention> {
    let tree = parser.parse(fragment_text)?;
    let mut links = find_links(&tree, keyword)?;

    let main = designate_main(prefix_length, links.iter().map(|link| link.end));
    if let Some(index) = main {
        links[index].is_main = true;
    }

    Ok(RenderedMention {
        text: stitch(fragment_text, &links, style),
        main_mark_found: main.is_some(),
    })
}

fn stitch(fragment_text: &str, links: &[LinkMatch], style: &MarkStyle) -> String {
    let mut out = String::with_capacity(fragment_text.len());
    let mut offset = 0;

    for link in links {
        out.push_str(&fragment_text[offset..link.start]);
        style.write_mark(
            &mut out,
            &escape_html(&link.text),
            &link.element_id,
            link.is_main,
        );
        offset = link.end;
    }
    out.push_str(&fragment_text[offset..]);

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notelink_parser::CmarkParser;

    fn render(text: &str, keyword: &str, prefix_length: usize) -> RenderedMention {
        render_mention(
            &CmarkParser::new(),
            text,
            &Keyword::parse(keyword).unwrap(),
            prefix_length,
            &MarkStyle::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_link_is_main() {
        let rendered = render("See [Intro](:/abc123) for details.", "abc123", 4);
        assert!(rendered.main_mark_found);
        assert_eq!(
            rendered.text,
            r#"See <mark class="note-link-mark-main">Intro</mark> for details."#
        );
    }

    #[test]
    fn test_leading_context_link_is_not_main() {
        let text = "[one](:/abc123) then [two](:/abc123) end";
        let rendered = render(text, "abc123", text.find("[two]").unwrap());
        assert_eq!(
            rendered.text,
            concat!(
                r#"<mark class="note-link-mark">one</mark> then "#,
                r#"<mark class="note-link-mark-main">two</mark> end"#
            )
        );
    }

    #[test]
    fn test_only_first_qualifying_link_is_main() {
        let rendered = render("[a](:/abc123) [b](:/abc123)", "abc123", 0);
        assert_eq!(rendered.text.matches("note-link-mark-main").count(), 1);
        assert!(rendered.text.starts_with(r#"<mark class="note-link-mark-main">a"#));
    }

    #[test]
    fn test_jump_control_for_element_links() {
        let style = MarkStyle {
            main_class: "note-link-mark-main".to_string(),
            jump_icon: "ICON".to_string(),
        };
        let rendered = render_mention(
            &CmarkParser::new(),
            "x [S](:/abc123#sec1) [T](:/abc123#sec2)",
            &Keyword::parse("abc123").unwrap(),
            2,
            &style,
        )
        .unwrap();
        assert_eq!(
            rendered.text,
            concat!(
                r#"x <mark class="note-link-mark-main">S<button data-note-link-element-id="sec1">ICON</button></mark> "#,
                r#"<mark class="note-link-mark">T</mark>"#
            )
        );
    }

    #[test]
    fn test_no_main_when_seed_missing() {
        let rendered = render("[a](:/abc123) and more text", "abc123", 20);
        assert!(!rendered.main_mark_found);
        assert!(!rendered.text.contains("note-link-mark-main"));
    }

    #[test]
    fn test_label_entities_stay_escaped() {
        let rendered = render("[a &#60; b](:/abc123)", "abc123", 0);
        assert_eq!(
            rendered.text,
            r#"<mark class="note-link-mark-main">a &#60; b</mark>"#
        );
    }

    #[test]
    fn test_designate_main() {
        assert_eq!(designate_main(5, [3, 5, 9]), Some(1));
        assert_eq!(designate_main(10, [3, 5, 9]), None);
        assert_eq!(designate_main(0, []), None);
    }
}
