//! Frozen tag co-occurrence graph.
//!
//! # Responsibility
//! - Hold weighted tag nodes and the undirected simple edge set.
//! - Expose read-only views for query, reporting and rendering.
//!
//! # Invariants
//! - Every node has an adjacency entry, possibly empty.
//! - Adjacency is symmetric and never contains a self-loop.
//! - No public API mutates a graph after construction; derived graphs
//!   (e.g. induced subgraphs) are new values.

use crate::model::note::Tag;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GraphResult<T> = Result<T, GraphError>;

/// Input contract violations raised while building or slicing a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A note cluster references a tag that has no node weight.
    UnknownClusterTag { tag: Tag, cluster_index: usize },
    /// An induced-subgraph request names a tag that is not a node.
    UnknownSubsetNode(Tag),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownClusterTag { tag, cluster_index } => write!(
                f,
                "cluster #{cluster_index} references tag `{tag}` missing from node weights"
            ),
            Self::UnknownSubsetNode(tag) => {
                write!(f, "subgraph node `{tag}` is not present in the graph")
            }
        }
    }
}

impl Error for GraphError {}

/// Node and edge counts of one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Undirected graph over tags with corpus-frequency node weights.
///
/// Values are only produced by the graph builder and by query operations that
/// derive new graphs. Fields are private, so holders can read but never
/// restructure a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGraph {
    #[serde(rename = "nodes")]
    weights: BTreeMap<Tag, usize>,
    adjacency: BTreeMap<Tag, BTreeSet<Tag>>,
}

impl TagGraph {
    /// Assembles a graph from parts already checked by the caller.
    ///
    /// # Invariants
    /// - `adjacency` keys equal `weights` keys.
    /// - Neighbor sets are symmetric and self-loop free.
    pub(crate) fn from_parts(
        weights: BTreeMap<Tag, usize>,
        adjacency: BTreeMap<Tag, BTreeSet<Tag>>,
    ) -> Self {
        debug_assert!(weights.keys().eq(adjacency.keys()));
        Self { weights, adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.weights.contains_key(tag)
    }

    /// Returns the corpus frequency stored on `tag`, if it is a node.
    pub fn weight(&self, tag: &str) -> Option<usize> {
        self.weights.get(tag).copied()
    }

    /// Returns the neighbors of `tag` in lexicographic order.
    pub fn neighbors(&self, tag: &str) -> Option<&BTreeSet<Tag>> {
        self.adjacency.get(tag)
    }

    /// Iterates nodes and weights in lexicographic tag order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.weights
            .iter()
            .map(|(tag, weight)| (tag.as_str(), *weight))
    }

    /// Iterates each undirected edge once as `(lower, higher)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.adjacency.iter().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .filter(move |to| from < *to)
                .map(move |to| (from.as_str(), to.as_str()))
        })
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }
}
