//! Tag extraction from raw note lines.
//!
//! # Responsibility
//! - Filter blank source lines before extraction.
//! - Turn one note line into a `Note` with its marker-prefixed tags.
//!
//! # Invariants
//! - Lines are lowercased before matching.
//! - Matches are non-overlapping, kept in order, duplicates preserved.
//! - Extraction never fails; a line without tags yields an empty list.

use crate::config::{is_word_char, ConfigError};
use crate::model::note::{Note, Tag};
use regex::Regex;

/// Returns whether a raw source line carries note content.
///
/// Lines whose trimmed length is at most one character (empty lines, a lone
/// newline, stray punctuation) are dropped before extraction.
pub fn is_note_line(line: &str) -> bool {
    line.trim().chars().nth(1).is_some()
}

/// Yields the raw lines that should become notes.
pub fn note_lines<'a, I>(lines: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter(|line| is_note_line(line))
}

/// Marker-driven tag extractor.
///
/// The pattern is compiled once per configured marker and reused for every
/// line of the corpus.
#[derive(Debug, Clone)]
pub struct TagExtractor {
    marker: char,
    pattern: Regex,
}

impl TagExtractor {
    /// Compiles the tag pattern for `marker`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidMarker` when the marker is whitespace or a word
    ///   character.
    pub fn new(marker: char) -> Result<Self, ConfigError> {
        if marker.is_whitespace() || is_word_char(marker) {
            return Err(ConfigError::InvalidMarker(marker));
        }
        let source = format!(r"{}(\w+)", regex::escape(marker.encode_utf8(&mut [0u8; 4])));
        let pattern = Regex::new(&source).map_err(|_| ConfigError::InvalidMarker(marker))?;
        Ok(Self { marker, pattern })
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Extracts the ordered tag list of one note line.
    pub fn extract(&self, line: &str) -> Note {
        let text = line.trim().to_lowercase();
        let tags = self.extract_tags(&text);
        Note::new(tags, text)
    }

    fn extract_tags(&self, normalized: &str) -> Vec<Tag> {
        self.pattern
            .captures_iter(normalized)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
