//! Corpus-level tag aggregation.
//!
//! # Responsibility
//! - Flatten note tag lists and count occurrences per distinct tag.
//! - Rank the most frequent tags with a reproducible tie-break.
//!
//! # Invariants
//! - `TagFrequency::total() == all_tags.len()`.
//! - Every counted tag has a count of at least one.
//! - Ranking is descending by count; equal counts keep first-seen order.

use crate::model::note::{Note, Tag};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Occurrence counts per tag, remembering first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFrequency {
    entries: Vec<(Tag, usize)>,
    index: HashMap<Tag, usize>,
}

impl TagFrequency {
    /// Counts every occurrence in `tags`, duplicates included.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequency = Self::default();
        for tag in tags {
            frequency.record(tag.as_ref());
        }
        frequency
    }

    fn record(&mut self, tag: &str) {
        match self.index.get(tag) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(tag.to_string(), self.entries.len());
                self.entries.push((tag.to_string(), 1));
            }
        }
    }

    /// Returns the occurrence count of `tag`, or `None` when never seen.
    pub fn get(&self, tag: &str) -> Option<usize> {
        self.index.get(tag).map(|&position| self.entries[position].1)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. total tag occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates `(tag, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
    }

    /// Returns the `n` most frequent tags.
    ///
    /// Sorting is stable over first-seen order, so ties resolve to the tag
    /// that appeared earlier in the corpus. `n` larger than the distinct tag
    /// count returns every tag.
    pub fn top_n(&self, n: usize) -> Vec<RankedTag> {
        let mut ranked: Vec<&(Tag, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(tag, count)| RankedTag {
                tag: tag.clone(),
                count: *count,
            })
            .collect()
    }
}

/// One entry of the most-popular ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTag {
    pub tag: Tag,
    pub count: usize,
}

/// Aggregation result over the whole corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusAggregate {
    /// Number of notes consumed.
    pub note_count: usize,
    /// Occurrence counts per distinct tag.
    pub tag_frequency: TagFrequency,
    /// Every tag of every note, in corpus order.
    pub all_tags: Vec<Tag>,
}

impl CorpusAggregate {
    /// Builds the summary record exposed to reporting.
    pub fn summary(&self, max_top_tags: usize) -> CorpusSummary {
        CorpusSummary {
            note_count: self.note_count,
            tag_occurrences: self.all_tags.len(),
            distinct_tags: self.tag_frequency.len(),
            top_tags: self.tag_frequency.top_n(max_top_tags),
        }
    }
}

/// Corpus statistics handed to the reporting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    pub note_count: usize,
    pub tag_occurrences: usize,
    pub distinct_tags: usize,
    pub top_tags: Vec<RankedTag>,
}

/// Flattens note tags and counts them.
pub fn aggregate(notes: &[Note]) -> CorpusAggregate {
    let all_tags: Vec<Tag> = notes
        .iter()
        .flat_map(|note| note.tags.iter().cloned())
        .collect();
    let tag_frequency = TagFrequency::from_tags(&all_tags);

    debug!(
        "event=corpus_aggregate module=corpus status=ok notes={} occurrences={} distinct={}",
        notes.len(),
        all_tags.len(),
        tag_frequency.len()
    );

    CorpusAggregate {
        note_count: notes.len(),
        tag_frequency,
        all_tags,
    }
}
