//! Configuration components for referrer and quick-link search

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Placeholder replaced by the target id in [`ReferrerConfig::search_pattern`]
pub const NOTE_ID_PLACEHOLDER: &str = "$noteId";

/// Placeholder replaced by the typed text in [`QuickLinkConfig::search_pattern`]
pub const KEYWORD_PLACEHOLDER: &str = "$keyword";

/// Class of every highlighted link that is not the main match
pub const MENTION_MARK_CLASS: &str = "note-link-mark";

/// Default class of the main match highlight
pub const DEFAULT_MAIN_MARK_CLASS: &str = "note-link-mark-main";

/// "box-arrow-in-left" icon shown inside the jump-to-element control
pub const DEFAULT_JUMP_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="currentColor" "#,
    r#"class="bi bi-box-arrow-in-left" viewBox="0 0 16 16">"#,
    r#"<path fill-rule="evenodd" d="M10 3.5a.5.5 0 0 0-.5-.5h-8a.5.5 0 0 0-.5.5v9a.5.5 0 0 0 .5.5h8a.5.5 0 0 0 .5-.5v-2a.5.5 0 0 1 1 0v2A1.5 1.5 0 0 1 9.5 14h-8A1.5 1.5 0 0 1 0 12.5v-9A1.5 1.5 0 0 1 1.5 2h8A1.5 1.5 0 0 1 11 3.5v2a.5.5 0 0 1-1 0z"/>"#,
    r#"<path fill-rule="evenodd" d="M4.146 8.354a.5.5 0 0 1 0-.708l3-3a.5.5 0 1 1 .708.708L5.707 7.5H14.5a.5.5 0 0 1 0 1H5.707l2.147 2.146a.5.5 0 0 1-.708.708z"/>"#,
    r#"</svg>"#
);

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLinkConfig {
    /// Referrer (backlink) search and mention excerpts
    #[serde(default)]
    pub referrers: ReferrerConfig,

    /// Quick-link note search
    #[serde(default)]
    pub quick_link: QuickLinkConfig,
}

impl NoteLinkConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> ConfigResult<()> {
        self.referrers.validate()?;
        self.quick_link.validate()
    }
}

/// How links to the target are located inside a note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Walk a parsed markdown tree (handles nested brackets)
    #[default]
    Syntax,
    /// Pattern match raw text; no parser required
    Regex,
}

/// Referrer search and mention excerpt configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerConfig {
    /// Search filter sent to the note source; `$noteId` is the target.
    ///
    /// An empty pattern disables referrer search.
    ///
    /// Default: `/":/$noteId"`
    #[serde(default = "default_referrer_search_pattern")]
    pub search_pattern: String,

    /// Excerpt length for the note-level referrer list; 0 disables excerpts
    #[serde(default = "default_mention_text_length")]
    pub note_mention_text_length: usize,

    /// Excerpt length for element referrer lists; 0 disables excerpts
    #[serde(default = "default_mention_text_length")]
    pub element_mention_text_length: usize,

    /// Link matching strategy
    #[serde(default)]
    pub strategy: MatchStrategy,

    /// Class of the main match highlight
    #[serde(default = "default_main_mark_class")]
    pub main_mark_class: String,

    /// Markup placed inside the jump-to-element control
    #[serde(default = "default_jump_icon")]
    pub jump_icon: String,
}

fn default_referrer_search_pattern() -> String {
    format!("/\":/{NOTE_ID_PLACEHOLDER}\"")
}

fn default_mention_text_length() -> usize {
    120
}

fn default_main_mark_class() -> String {
    DEFAULT_MAIN_MARK_CLASS.to_string()
}

fn default_jump_icon() -> String {
    DEFAULT_JUMP_ICON.to_string()
}

impl Default for ReferrerConfig {
    fn default() -> Self {
        Self {
            search_pattern: default_referrer_search_pattern(),
            note_mention_text_length: default_mention_text_length(),
            element_mention_text_length: default_mention_text_length(),
            strategy: MatchStrategy::default(),
            main_mark_class: default_main_mark_class(),
            jump_icon: default_jump_icon(),
        }
    }
}

impl ReferrerConfig {
    /// Whether referrer search is turned on
    pub fn is_enabled(&self) -> bool {
        !self.search_pattern.is_empty()
    }

    /// Substitute the target into the search pattern
    pub fn query_for(&self, target: &str) -> String {
        self.search_pattern.replace(NOTE_ID_PLACEHOLDER, target)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.is_enabled() && !self.search_pattern.contains(NOTE_ID_PLACEHOLDER) {
            return Err(ConfigError::invalid(format!(
                "referrers.search_pattern must contain {NOTE_ID_PLACEHOLDER}"
            )));
        }
        if self.main_mark_class.trim().is_empty() {
            return Err(ConfigError::invalid("referrers.main_mark_class is empty"));
        }
        if self.main_mark_class == MENTION_MARK_CLASS {
            return Err(ConfigError::invalid(format!(
                "referrers.main_mark_class must differ from {MENTION_MARK_CLASS}"
            )));
        }
        Ok(())
    }
}

/// Quick-link search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLinkConfig {
    /// Search filter sent to the note source; `$keyword` is the typed text.
    ///
    /// An empty pattern disables quick-link search.
    ///
    /// Default: `$keyword*`
    #[serde(default = "default_quick_link_search_pattern")]
    pub search_pattern: String,

    /// Annotate results with their notebook path
    #[serde(default)]
    pub show_path: bool,

    /// Number of recently updated notes listed when nothing is typed
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_quick_link_search_pattern() -> String {
    format!("{KEYWORD_PLACEHOLDER}*")
}

fn default_recent_limit() -> usize {
    20
}

impl Default for QuickLinkConfig {
    fn default() -> Self {
        Self {
            search_pattern: default_quick_link_search_pattern(),
            show_path: false,
            recent_limit: default_recent_limit(),
        }
    }
}

impl QuickLinkConfig {
    /// Whether quick-link search is turned on
    pub fn is_enabled(&self) -> bool {
        !self.search_pattern.is_empty()
    }

    /// Substitute the typed text into the search pattern
    pub fn query_for(&self, keyword: &str) -> String {
        self.search_pattern.replace(KEYWORD_PLACEHOLDER, keyword)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.is_enabled() && !self.search_pattern.contains(KEYWORD_PLACEHOLDER) {
            return Err(ConfigError::invalid(format!(
                "quick_link.search_pattern must contain {KEYWORD_PLACEHOLDER}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NoteLinkConfig::default();
        assert_eq!(config.referrers.search_pattern, "/\":/$noteId\"");
        assert_eq!(config.referrers.note_mention_text_length, 120);
        assert_eq!(config.referrers.element_mention_text_length, 120);
        assert_eq!(config.referrers.strategy, MatchStrategy::Syntax);
        assert_eq!(config.referrers.main_mark_class, "note-link-mark-main");
        assert_eq!(config.quick_link.search_pattern, "$keyword*");
        assert!(!config.quick_link.show_path);
        assert_eq!(config.quick_link.recent_limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_query_substitution() {
        let referrers = ReferrerConfig::default();
        assert_eq!(referrers.query_for("abc123#sec1"), "/\":/abc123#sec1\"");

        let quick_link = QuickLinkConfig::default();
        assert_eq!(quick_link.query_for("rust"), "rust*");
    }

    #[test]
    fn test_empty_patterns_disable_search() {
        let config = NoteLinkConfig {
            referrers: ReferrerConfig {
                search_pattern: String::new(),
                ..Default::default()
            },
            quick_link: QuickLinkConfig {
                search_pattern: String::new(),
                ..Default::default()
            },
        };
        assert!(!config.referrers.is_enabled());
        assert!(!config.quick_link.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pattern_without_placeholder_is_rejected() {
        let referrers = ReferrerConfig {
            search_pattern: "body:abc".to_string(),
            ..Default::default()
        };
        assert!(matches!(referrers.validate(), Err(ConfigError::Invalid(_))));

        let quick_link = QuickLinkConfig {
            search_pattern: "title:*".to_string(),
            ..Default::default()
        };
        assert!(matches!(quick_link.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_main_mark_class_must_be_distinct() {
        let referrers = ReferrerConfig {
            main_mark_class: MENTION_MARK_CLASS.to_string(),
            ..Default::default()
        };
        assert!(referrers.validate().is_err());

        let referrers = ReferrerConfig {
            main_mark_class: "  ".to_string(),
            ..Default::default()
        };
        assert!(referrers.validate().is_err());
    }

    #[test]
    fn test_deserialize_strategy() {
        let config: ReferrerConfig = toml::from_str(r#"strategy = "regex""#).unwrap();
        assert_eq!(config.strategy, MatchStrategy::Regex);
        assert_eq!(config.note_mention_text_length, 120);
    }
}
