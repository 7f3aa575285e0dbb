//! Note and tag value types.
//!
//! # Responsibility
//! - Define the per-line note record produced by the tag extractor.
//!
//! # Invariants
//! - `text` is the lowercased source line.
//! - `tags` keeps match order and duplicates from the source line.

use serde::{Deserialize, Serialize};

/// Normalized tag label: lowercased, marker stripped.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type Tag = String;

/// One non-blank input line and the tags found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Tags in match order; a tag mentioned twice appears twice.
    pub tags: Vec<Tag>,
    /// Lowercased source line, kept for traceability only.
    pub text: String,
}

impl Note {
    /// Creates a note from already-normalized parts.
    pub fn new(tags: Vec<Tag>, text: impl Into<String>) -> Self {
        Self {
            tags,
            text: text.into(),
        }
    }

    /// Returns whether no tag was found in this note.
    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}
