//! Core analysis services.
//!
//! # Responsibility
//! - Extract tags, aggregate the corpus, build and query the graph.
//! - Keep every stage a pure function over explicit inputs.

pub mod analyzer;
pub mod corpus;
pub mod graph_builder;
pub mod graph_query;
pub mod tag_extractor;
