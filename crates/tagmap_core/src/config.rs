//! Analysis configuration and validation.
//!
//! # Responsibility
//! - Carry marker, ranking size, key tags and render targets explicitly into
//!   every component.
//! - Reject malformed settings before any graph work begins.
//!
//! # Invariants
//! - A validated config has `max_top_tags > 0`.
//! - The marker is neither whitespace nor a word character.
//! - Key tags are stored normalized: trimmed, marker stripped, lowercased.

use crate::model::note::Tag;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_MARKER: char = '@';
pub const DEFAULT_MAX_TOP_TAGS: usize = 10;
pub const DEFAULT_FULL_GRAPH_OUTPUT: &str = "full_graph.dot";
pub const DEFAULT_POPULAR_GRAPH_OUTPUT: &str = "popular_graph.dot";

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").expect("valid word regex"));

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_top_tags` must be a positive integer.
    NonPositiveTopTags(usize),
    /// Marker cannot be whitespace or a character that may appear in a tag.
    InvalidMarker(char),
    /// A key tag is blank after trimming and marker removal.
    BlankKeyTag(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveTopTags(value) => {
                write!(f, "max_top_tags must be greater than zero, got {value}")
            }
            Self::InvalidMarker(marker) => write!(
                f,
                "invalid tag marker `{marker}`: must not be whitespace or a word character"
            ),
            Self::BlankKeyTag(raw) => write!(f, "key tag `{raw}` is blank"),
        }
    }
}

impl Error for ConfigError {}

/// Explicit settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagMapConfig {
    /// Single character that prefixes a tag in note text.
    pub marker: char,
    /// Size of the most-popular ranking.
    pub max_top_tags: usize,
    /// Tags that get a neighbor report.
    pub key_tags: Vec<Tag>,
    /// Render target for the full graph.
    pub full_graph_output: PathBuf,
    /// Render target for the top-N graph.
    pub popular_graph_output: PathBuf,
}

impl Default for TagMapConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            max_top_tags: DEFAULT_MAX_TOP_TAGS,
            key_tags: Vec::new(),
            full_graph_output: PathBuf::from(DEFAULT_FULL_GRAPH_OUTPUT),
            popular_graph_output: PathBuf::from(DEFAULT_POPULAR_GRAPH_OUTPUT),
        }
    }
}

impl TagMapConfig {
    /// Validates settings and returns the normalized config.
    ///
    /// # Errors
    /// - `NonPositiveTopTags` when `max_top_tags == 0`.
    /// - `InvalidMarker` when the marker is whitespace or a word character.
    /// - `BlankKeyTag` for key tags that are empty once normalized.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_top_tags == 0 {
            return Err(ConfigError::NonPositiveTopTags(self.max_top_tags));
        }
        if self.marker.is_whitespace() || is_word_char(self.marker) {
            return Err(ConfigError::InvalidMarker(self.marker));
        }

        let marker = self.marker;
        let key_tags = self
            .key_tags
            .iter()
            .map(|raw| normalize_key_tag(raw, marker))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { key_tags, ..self })
    }
}

/// Normalizes one user-supplied tag name for lookup.
///
/// Accepts both `doctor` and `@Doctor` forms. Names that can never match a
/// tag (`sore-throat`) are kept and later reported as lookup misses.
pub fn normalize_key_tag(raw: &str, marker: char) -> Result<Tag, ConfigError> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix(marker).unwrap_or(trimmed);
    let normalized = stripped.to_lowercase();
    if normalized.is_empty() {
        return Err(ConfigError::BlankKeyTag(raw.to_string()));
    }
    Ok(normalized)
}

/// Word characters as understood by the tag pattern (`\w`).
pub(crate) fn is_word_char(value: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_RE.is_match(value.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::{normalize_key_tag, ConfigError, TagMapConfig};

    #[test]
    fn default_config_is_valid() {
        let config = TagMapConfig::default().validate().unwrap();
        assert_eq!(config.marker, '@');
        assert_eq!(config.max_top_tags, 10);
        assert!(config.key_tags.is_empty());
    }

    #[test]
    fn validate_rejects_zero_top_tags() {
        let config = TagMapConfig {
            max_top_tags: 0,
            ..TagMapConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::NonPositiveTopTags(0)
        );
    }

    #[test]
    fn validate_rejects_word_and_space_markers() {
        for marker in ['a', '_', '7', ' '] {
            let config = TagMapConfig {
                marker,
                ..TagMapConfig::default()
            };
            assert_eq!(
                config.validate().unwrap_err(),
                ConfigError::InvalidMarker(marker)
            );
        }
    }

    #[test]
    fn key_tags_are_normalized() {
        let config = TagMapConfig {
            marker: '#',
            key_tags: vec![" #Doctor ".to_string(), "ФОТО".to_string()],
            ..TagMapConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.key_tags, vec!["doctor", "фото"]);
    }

    #[test]
    fn normalize_key_tag_rejects_only_blank_values() {
        assert!(matches!(
            normalize_key_tag("  @ ", '@'),
            Err(ConfigError::BlankKeyTag(_))
        ));
        assert_eq!(normalize_key_tag("@Sore-Throat", '@').unwrap(), "sore-throat");
    }

    #[test]
    fn unknown_json_fields_are_rejected() {
        let err = serde_json::from_str::<TagMapConfig>(r#"{"max_top_tag": 0}"#).unwrap_err();
        assert!(err.to_string().contains("max_top_tag"));
    }
}
