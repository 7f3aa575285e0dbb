use tagmap_core::{describe, AnalyzeError, ConfigError, TagLookup, TagMapAnalyzer, TagMapConfig};

fn analyzer(key_tags: &[&str], max_top_tags: usize) -> TagMapAnalyzer {
    let config = TagMapConfig {
        key_tags: key_tags.iter().map(|tag| tag.to_string()).collect(),
        max_top_tags,
        ..TagMapConfig::default()
    };
    TagMapAnalyzer::new(config).unwrap()
}

#[test]
fn two_note_corpus_produces_expected_graph_and_reports() {
    let report = analyzer(&["doctor", "unknown"], 10)
        .analyze(["headache @doctor @clinic", "checkup @doctor @photo"])
        .unwrap();

    assert_eq!(report.summary.note_count, 2);
    assert_eq!(report.summary.tag_occurrences, 4);
    assert_eq!(report.summary.distinct_tags, 3);
    let ranked: Vec<_> = report
        .summary
        .top_tags
        .iter()
        .map(|entry| (entry.tag.as_str(), entry.count))
        .collect();
    assert_eq!(ranked, vec![("doctor", 2), ("clinic", 1), ("photo", 1)]);

    assert_eq!(report.full_stats.nodes, 3);
    assert_eq!(report.full_stats.edges, 2);
    let edges: Vec<_> = report.full_graph.edges().collect();
    assert_eq!(edges, vec![("clinic", "doctor"), ("doctor", "photo")]);

    match &report.key_tags[0] {
        TagLookup::Found(found) => {
            assert_eq!(found.weight, 2);
            assert_eq!(found.neighbors, vec!["clinic", "photo"]);
        }
        other => panic!("doctor should be found, got {other:?}"),
    }
    assert_eq!(
        report.key_tags[1],
        TagLookup::NotFound {
            tag: "unknown".to_string()
        }
    );
    assert_eq!(
        describe(&report.full_graph, "unknown"),
        report.key_tags[1]
    );
}

#[test]
fn key_tags_are_matched_case_insensitively_with_marker() {
    let report = analyzer(&["@Doctor"], 10)
        .analyze(["@DOCTOR visit", "@doctor @lab"])
        .unwrap();
    assert!(report.key_tags[0].is_found());
    assert_eq!(report.key_tags[0].tag(), "doctor");
}

#[test]
fn unmatchable_key_tag_is_reported_as_not_found() {
    let report = analyzer(&["doctor", "sore-throat"], 10)
        .analyze(["@doctor @clinic"])
        .unwrap();
    assert!(report.key_tags[0].is_found());
    assert_eq!(
        report.key_tags[1],
        TagLookup::NotFound {
            tag: "sore-throat".to_string()
        }
    );
}

#[test]
fn top_n_above_distinct_count_returns_everything() {
    let report = analyzer(&[], 100).analyze(["@b @a @b", "@c"]).unwrap();
    let tags: Vec<_> = report.popular_nodes();
    assert_eq!(tags, vec!["b", "a", "c"]);
    assert_eq!(report.popular_graph, report.full_graph);
}

#[test]
fn empty_corpus_yields_empty_graph() {
    let report = analyzer(&["x"], 10).analyze(["", "\n"]).unwrap();
    assert_eq!(report.summary.note_count, 0);
    assert_eq!(report.full_stats.nodes, 0);
    assert!(!report.key_tags[0].is_found());
}

#[test]
fn malformed_configuration_is_rejected_before_analysis() {
    let config = TagMapConfig {
        key_tags: vec!["   ".to_string()],
        ..TagMapConfig::default()
    };
    let err = TagMapAnalyzer::new(config).unwrap_err();
    assert!(matches!(
        err,
        AnalyzeError::Config(ConfigError::BlankKeyTag(_))
    ));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn report_serializes_summary_graph_and_lookups() {
    let report = analyzer(&["doctor", "ghost"], 1)
        .analyze(["@doctor @clinic"])
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["note_count"], 1);
    assert_eq!(json["summary"]["top_tags"][0]["tag"], "doctor");
    assert_eq!(json["full_graph"]["nodes"]["doctor"], 1);
    assert_eq!(json["full_graph"]["adjacency"]["clinic"][0], "doctor");
    assert_eq!(json["popular_stats"]["nodes"], 1);
    assert_eq!(json["key_tags"][0]["status"], "found");
    assert_eq!(json["key_tags"][0]["neighbors"][0], "clinic");
    assert_eq!(json["key_tags"][1]["status"], "not_found");
}

#[test]
fn config_loads_from_json_with_defaults() {
    let config: TagMapConfig =
        serde_json::from_str(r##"{"marker": "#", "key_tags": ["Work"]}"##).unwrap();
    assert_eq!(config.max_top_tags, 10);
    let analyzer = TagMapAnalyzer::new(config).unwrap();
    assert_eq!(analyzer.config().key_tags, vec!["work"]);
}

#[test]
fn config_with_misspelled_key_fails_to_load() {
    let err = serde_json::from_str::<TagMapConfig>(r#"{"max_top_tag": 0}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `max_top_tag`"));
}
