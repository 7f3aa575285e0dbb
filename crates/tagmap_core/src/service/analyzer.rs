//! End-to-end analysis of a note corpus.
//!
//! # Responsibility
//! - Run blank-line filtering, extraction, aggregation, graph build and
//!   key-tag queries in order.
//! - Produce one report value for text/JSON presentation and rendering.
//!
//! # Invariants
//! - Configuration is validated before any note is read.
//! - Key-tag misses are reported in the result and never abort the run.

use crate::config::{ConfigError, TagMapConfig};
use crate::model::graph::{GraphError, GraphStats, TagGraph};
use crate::model::note::{Note, Tag};
use crate::service::corpus::{aggregate, CorpusSummary};
use crate::service::graph_builder::build_graph;
use crate::service::graph_query::{describe, induced_subgraph, TagLookup};
use crate::service::tag_extractor::{note_lines, TagExtractor};
use log::{error, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Analysis failure: bad settings or a broken graph contract.
#[derive(Debug)]
pub enum AnalyzeError {
    Config(ConfigError),
    Graph(GraphError),
}

impl Display for AnalyzeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Graph(err) => write!(f, "graph construction failed: {err}"),
        }
    }
}

impl Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Graph(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AnalyzeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<GraphError> for AnalyzeError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

/// Everything one run derives from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub summary: CorpusSummary,
    pub full_graph: TagGraph,
    pub full_stats: GraphStats,
    /// Induced subgraph over the top-N tags.
    pub popular_graph: TagGraph,
    pub popular_stats: GraphStats,
    /// One entry per configured key tag, in configuration order.
    pub key_tags: Vec<TagLookup>,
}

impl AnalysisReport {
    /// Node set of the full graph, in lexicographic order.
    pub fn full_nodes(&self) -> Vec<Tag> {
        self.full_graph
            .nodes()
            .map(|(tag, _)| tag.to_string())
            .collect()
    }

    /// Top-N node set, in ranking order.
    pub fn popular_nodes(&self) -> Vec<Tag> {
        self.summary
            .top_tags
            .iter()
            .map(|entry| entry.tag.clone())
            .collect()
    }
}

/// Stateless analysis facade bound to one validated configuration.
#[derive(Debug, Clone)]
pub struct TagMapAnalyzer {
    config: TagMapConfig,
    extractor: TagExtractor,
}

impl TagMapAnalyzer {
    /// Validates `config` and compiles the tag extractor.
    pub fn new(config: TagMapConfig) -> Result<Self, AnalyzeError> {
        let config = config.validate()?;
        let extractor = TagExtractor::new(config.marker)?;
        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &TagMapConfig {
        &self.config
    }

    /// Filters blank lines and extracts one note per remaining line.
    pub fn extract_notes<'a, I>(&self, lines: I) -> Vec<Note>
    where
        I: IntoIterator<Item = &'a str>,
    {
        note_lines(lines)
            .map(|line| self.extractor.extract(line))
            .collect()
    }

    /// Runs the full pipeline over raw note lines.
    ///
    /// # Errors
    /// - `AnalyzeError::Graph` when graph construction or subgraph
    ///   extraction hits a contract violation.
    pub fn analyze<'a, I>(&self, lines: I) -> Result<AnalysisReport, AnalyzeError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let started_at = Instant::now();
        let notes = self.extract_notes(lines);
        let corpus = aggregate(&notes);
        let summary = corpus.summary(self.config.max_top_tags);

        let result = build_graph(&corpus.tag_frequency, notes.iter().map(|note| &note.tags))
            .and_then(|full_graph| {
                let popular_graph = induced_subgraph(
                    &full_graph,
                    summary.top_tags.iter().map(|entry| entry.tag.as_str()),
                )?;
                Ok((full_graph, popular_graph))
            });
        let (full_graph, popular_graph) = match result {
            Ok(graphs) => graphs,
            Err(err) => {
                error!(
                    "event=analyze module=analyzer status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        let key_tags = self
            .config
            .key_tags
            .iter()
            .map(|tag| describe(&full_graph, tag))
            .collect::<Vec<_>>();

        let full_stats = full_graph.stats();
        let popular_stats = popular_graph.stats();
        info!(
            "event=analyze module=analyzer status=ok duration_ms={} notes={} occurrences={} distinct={} nodes={} edges={} key_tags={} key_tags_missing={}",
            started_at.elapsed().as_millis(),
            summary.note_count,
            summary.tag_occurrences,
            summary.distinct_tags,
            full_stats.nodes,
            full_stats.edges,
            key_tags.len(),
            key_tags.iter().filter(|lookup| !lookup.is_found()).count()
        );

        Ok(AnalysisReport {
            summary,
            full_graph,
            full_stats,
            popular_graph,
            popular_stats,
            key_tags,
        })
    }
}
