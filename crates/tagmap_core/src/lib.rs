//! Tag co-occurrence analysis for free-text notes.
//! This crate owns tag extraction, corpus statistics and the frozen tag graph.

pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use config::{normalize_key_tag, ConfigError, TagMapConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::graph::{GraphError, GraphResult, GraphStats, TagGraph};
pub use model::note::{Note, Tag};
pub use render::{DotRenderer, GraphRenderer, RenderError};
pub use service::analyzer::{AnalysisReport, AnalyzeError, TagMapAnalyzer};
pub use service::corpus::{aggregate, CorpusAggregate, CorpusSummary, RankedTag, TagFrequency};
pub use service::graph_builder::build_graph;
pub use service::graph_query::{describe, induced_subgraph, TagLookup, TagReport};
pub use service::tag_extractor::{is_note_line, note_lines, TagExtractor};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
