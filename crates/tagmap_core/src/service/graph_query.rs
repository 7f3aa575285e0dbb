//! Read-only queries over a built tag graph.
//!
//! # Responsibility
//! - Report a tag's weight and neighborhood, or a structured miss.
//! - Derive induced subgraphs for reporting and rendering.
//!
//! # Invariants
//! - Queries never mutate the source graph.
//! - A lookup miss is a value, not an error.
//! - Subgraph requests naming unknown nodes are rejected, never trimmed.

use crate::model::graph::{GraphError, GraphResult, TagGraph};
use crate::model::note::Tag;
use log::{debug, warn};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Weight and neighbors of one tag present in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    pub tag: Tag,
    pub weight: usize,
    /// Lexicographically ordered.
    pub neighbors: Vec<Tag>,
}

/// Outcome of a single tag lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TagLookup {
    Found(TagReport),
    NotFound { tag: Tag },
}

impl TagLookup {
    pub fn tag(&self) -> &str {
        match self {
            Self::Found(report) => report.tag.as_str(),
            Self::NotFound { tag } => tag.as_str(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Looks up `tag` and returns its report or a `NotFound` marker.
pub fn describe(graph: &TagGraph, tag: &str) -> TagLookup {
    match (graph.weight(tag), graph.neighbors(tag)) {
        (Some(weight), Some(neighbors)) => TagLookup::Found(TagReport {
            tag: tag.to_string(),
            weight,
            neighbors: neighbors.iter().cloned().collect(),
        }),
        _ => {
            warn!("event=tag_lookup module=query status=not_found");
            TagLookup::NotFound {
                tag: tag.to_string(),
            }
        }
    }
}

/// Restricts `graph` to `nodes` and the edges running between them.
///
/// Duplicate entries in `nodes` are tolerated.
///
/// # Errors
/// - `GraphError::UnknownSubsetNode` for the first entry of `nodes` that is
///   not a node of `graph`.
pub fn induced_subgraph<I, S>(graph: &TagGraph, nodes: I) -> GraphResult<TagGraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut weights = BTreeMap::new();
    for node in nodes {
        let node = node.as_ref();
        let weight = graph
            .weight(node)
            .ok_or_else(|| GraphError::UnknownSubsetNode(node.to_string()))?;
        weights.insert(node.to_string(), weight);
    }

    let adjacency: BTreeMap<Tag, BTreeSet<Tag>> = weights
        .keys()
        .map(|tag| {
            let kept = graph
                .neighbors(tag)
                .into_iter()
                .flatten()
                .filter(|neighbor| weights.contains_key(*neighbor))
                .cloned()
                .collect();
            (tag.clone(), kept)
        })
        .collect();

    let subgraph = TagGraph::from_parts(weights, adjacency);
    debug!(
        "event=induced_subgraph module=query status=ok nodes={} edges={}",
        subgraph.node_count(),
        subgraph.edge_count()
    );
    Ok(subgraph)
}
