//! Co-occurrence graph construction.
//!
//! # Responsibility
//! - Turn tag frequencies into weighted nodes.
//! - Turn each note's tag cluster into pairwise co-occurrence edges.
//!
//! # Invariants
//! - Every weighted tag becomes a node, isolated or not.
//! - Edges join distinct tags only; repeats inside a cluster add nothing.
//! - A cluster tag without a node weight aborts the build.
//! - Identical inputs produce equal graphs.

use crate::model::graph::{GraphError, GraphResult, TagGraph};
use crate::model::note::Tag;
use crate::service::corpus::TagFrequency;
use log::{debug, error};
use std::collections::{BTreeMap, BTreeSet};

/// Builds the frozen co-occurrence graph.
///
/// `clusters` holds one tag list per note. Lists may contain duplicates; they
/// are reduced to distinct values before pairing.
///
/// # Errors
/// - `GraphError::UnknownClusterTag` when a cluster names a tag that is not a
///   key of `node_weights`.
pub fn build_graph<I, C>(node_weights: &TagFrequency, clusters: I) -> GraphResult<TagGraph>
where
    I: IntoIterator<Item = C>,
    C: AsRef<[Tag]>,
{
    let weights: BTreeMap<Tag, usize> = node_weights
        .iter()
        .map(|(tag, weight)| (tag.to_string(), weight))
        .collect();
    let mut adjacency: BTreeMap<Tag, BTreeSet<Tag>> = weights
        .keys()
        .map(|tag| (tag.clone(), BTreeSet::new()))
        .collect();

    for (cluster_index, cluster) in clusters.into_iter().enumerate() {
        let distinct = distinct_cluster_tags(cluster.as_ref(), &weights, cluster_index)?;
        for (position, from) in distinct.iter().enumerate() {
            for to in distinct.iter().skip(position + 1) {
                link(&mut adjacency, from, to);
                link(&mut adjacency, to, from);
            }
        }
    }

    let graph = TagGraph::from_parts(weights, adjacency);
    debug!(
        "event=graph_build module=graph status=ok nodes={} edges={}",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn distinct_cluster_tags<'a>(
    cluster: &'a [Tag],
    weights: &BTreeMap<Tag, usize>,
    cluster_index: usize,
) -> GraphResult<BTreeSet<&'a str>> {
    let mut distinct = BTreeSet::new();
    for tag in cluster {
        if !weights.contains_key(tag) {
            error!(
                "event=graph_build module=graph status=error error_code=unknown_cluster_tag cluster={}",
                cluster_index
            );
            return Err(GraphError::UnknownClusterTag {
                tag: tag.clone(),
                cluster_index,
            });
        }
        distinct.insert(tag.as_str());
    }
    Ok(distinct)
}

fn link(adjacency: &mut BTreeMap<Tag, BTreeSet<Tag>>, from: &str, to: &str) {
    if let Some(neighbors) = adjacency.get_mut(from) {
        neighbors.insert(to.to_string());
    }
}
