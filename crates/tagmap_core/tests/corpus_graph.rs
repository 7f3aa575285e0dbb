use std::collections::BTreeSet;
use tagmap_core::{
    aggregate, build_graph, induced_subgraph, GraphError, Note, TagExtractor, TagGraph,
};

const CORPUS: &[&str] = &[
    "headache @doctor @clinic @doctor",
    "checkup @doctor @photo",
    "vacation @photo @sea @beach",
    "lonely @solo",
    "no tags here",
    "@sea @beach @sea",
];

fn notes() -> Vec<Note> {
    let extractor = TagExtractor::new('@').unwrap();
    CORPUS.iter().map(|line| extractor.extract(line)).collect()
}

fn graph_of(notes: &[Note]) -> TagGraph {
    let corpus = aggregate(notes);
    build_graph(&corpus.tag_frequency, notes.iter().map(|note| &note.tags)).unwrap()
}

#[test]
fn frequency_sum_matches_flattened_tag_count() {
    let notes = notes();
    let corpus = aggregate(&notes);
    let flattened: usize = notes.iter().map(|note| note.tags.len()).sum();
    assert_eq!(corpus.tag_frequency.total(), flattened);
    assert_eq!(corpus.all_tags.len(), flattened);

    let distinct: BTreeSet<_> = corpus.all_tags.iter().collect();
    assert_eq!(corpus.tag_frequency.len(), distinct.len());
}

#[test]
fn every_counted_tag_is_a_node_with_its_frequency() {
    let notes = notes();
    let corpus = aggregate(&notes);
    let graph = graph_of(&notes);

    assert_eq!(graph.node_count(), corpus.tag_frequency.len());
    for (tag, count) in corpus.tag_frequency.iter() {
        assert_eq!(graph.weight(tag), Some(count), "weight of {tag}");
    }
    assert_eq!(graph.weight("here"), None);
    assert_eq!(graph.neighbors("solo").map(|set| set.len()), Some(0));
}

#[test]
fn graph_never_contains_self_loops() {
    let graph = graph_of(&notes());
    for (tag, _) in graph.nodes() {
        assert!(!graph.has_edge(tag, tag), "self-loop on {tag}");
    }
    assert!(graph.edges().all(|(from, to)| from != to));
}

#[test]
fn repeated_co_occurrence_does_not_multiply_edges() {
    let graph = graph_of(&notes());
    let sea_beach = graph
        .edges()
        .filter(|edge| *edge == ("beach", "sea"))
        .count();
    assert_eq!(sea_beach, 1);
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn building_twice_yields_identical_graphs() {
    let notes = notes();
    let first = graph_of(&notes);
    let second = graph_of(&notes);
    assert_eq!(first, second);
    assert_eq!(
        first.edges().collect::<Vec<_>>(),
        second.edges().collect::<Vec<_>>()
    );
}

#[test]
fn induced_subgraph_keeps_exactly_inner_edges() {
    let graph = graph_of(&notes());
    let subset = ["doctor", "photo", "sea", "solo"];
    let subgraph = induced_subgraph(&graph, subset).unwrap();

    let nodes: BTreeSet<_> = subgraph.nodes().map(|(tag, _)| tag).collect();
    assert_eq!(nodes, subset.into_iter().collect::<BTreeSet<_>>());

    let expected: BTreeSet<_> = graph
        .edges()
        .filter(|(a, b)| subset.contains(a) && subset.contains(b))
        .collect();
    let actual: BTreeSet<_> = subgraph.edges().collect();
    assert_eq!(actual, expected);
    assert_eq!(subgraph.weight("doctor"), graph.weight("doctor"));
}

#[test]
fn induced_subgraph_leaves_source_graph_untouched() {
    let graph = graph_of(&notes());
    let before = graph.clone();
    let _ = induced_subgraph(&graph, ["doctor"]).unwrap();
    assert_eq!(graph, before);
}

#[test]
fn induced_subgraph_rejects_foreign_nodes() {
    let graph = graph_of(&notes());
    let err = induced_subgraph(&graph, ["doctor", "dentist"]).unwrap_err();
    assert_eq!(err, GraphError::UnknownSubsetNode("dentist".to_string()));
    assert!(err.to_string().contains("dentist"));
}
