//! Graphviz DOT exporter.

use crate::model::graph::TagGraph;
use crate::render::{GraphRenderer, RenderError};
use crate::service::graph_query::induced_subgraph;
use log::{error, info};
use std::fmt::Write as _;
use std::path::Path;

const DEFAULT_GRAPH_NAME: &str = "tagmap";
const BASE_NODE_WIDTH: f64 = 0.3;
const DEFAULT_WIDTH_PER_WEIGHT: f64 = 0.15;

/// Writes undirected DOT files; node width grows with tag weight.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    graph_name: String,
    width_per_weight: f64,
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self {
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
            width_per_weight: DEFAULT_WIDTH_PER_WEIGHT,
        }
    }
}

impl DotRenderer {
    pub fn new(graph_name: impl Into<String>, width_per_weight: f64) -> Self {
        Self {
            graph_name: graph_name.into(),
            width_per_weight,
        }
    }

    /// Formats `graph` as DOT, nodes first in `order`, then edges.
    ///
    /// Callers pass the subgraph already induced by `order`, so every entry
    /// is a node of `graph`.
    pub(crate) fn format_dot(&self, graph: &TagGraph, order: &[String]) -> String {
        let mut dot = String::new();
        let _ = writeln!(dot, "graph {} {{", quote(&self.graph_name));
        dot.push_str("  layout=neato;\n");
        dot.push_str("  overlap=false;\n");
        dot.push_str("  node [shape=circle, style=filled, fillcolor=\"#ff0000cc\"];\n\n");

        for tag in order {
            if let Some(weight) = graph.weight(tag) {
                let width = BASE_NODE_WIDTH + weight as f64 * self.width_per_weight;
                let _ = writeln!(
                    dot,
                    "  {} [label={}, width={:.2}, tooltip=\"weight {}\"];",
                    quote(tag),
                    quote(tag),
                    width,
                    weight
                );
            }
        }

        dot.push('\n');
        for (from, to) in graph.edges() {
            let _ = writeln!(dot, "  {} -- {};", quote(from), quote(to));
        }
        dot.push_str("}\n");
        dot
    }
}

impl GraphRenderer for DotRenderer {
    fn render(
        &self,
        graph: &TagGraph,
        nodes: &[String],
        output: &Path,
    ) -> Result<(), RenderError> {
        let subgraph = induced_subgraph(graph, nodes)?;
        let dot = self.format_dot(&subgraph, nodes);
        if let Err(err) = std::fs::write(output, dot) {
            error!(
                "event=render module=render status=error format=dot error_code=write_failed error={}",
                err
            );
            return Err(err.into());
        }
        info!(
            "event=render module=render status=ok format=dot nodes={} edges={}",
            subgraph.node_count(),
            subgraph.edge_count()
        );
        Ok(())
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
