//! Graph rendering boundary.
//!
//! # Responsibility
//! - Define the contract used to hand a graph plus a node subset to a
//!   visual exporter.
//! - Ship a Graphviz DOT implementation.
//!
//! # Invariants
//! - Renderers only draw nodes of the requested subset and edges between them.
//! - Renderers never mutate the graph.

use crate::model::graph::{GraphError, TagGraph};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub mod dot;

pub use dot::DotRenderer;

/// Rendering failure.
#[derive(Debug)]
pub enum RenderError {
    /// The requested node subset is not part of the graph.
    Graph(GraphError),
    /// Output could not be written.
    Io(std::io::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Graph(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write graph image: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<GraphError> for RenderError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Visual exporter for a node subset of a tag graph.
pub trait GraphRenderer {
    /// Draws the subgraph induced by `nodes` into `output`.
    fn render(&self, graph: &TagGraph, nodes: &[String], output: &Path)
        -> Result<(), RenderError>;
}
