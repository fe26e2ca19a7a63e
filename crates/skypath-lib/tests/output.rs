mod common;

use skypath_lib::{
    path_attributes, EngineConfig, Objective, RenderMode, ShortestPathFinder, SkylineEngine,
    SkylineRequest, SkylineSummary, SumAggregator,
};

use common::sample_graph;

fn sample_summary() -> SkylineSummary {
    let engine = SkylineEngine::new(sample_graph(), EngineConfig::new(4)).expect("engine");
    let result = engine
        .query(&SkylineRequest::new(0, 5))
        .expect("query succeeds");
    SkylineSummary::from_result(&result)
}

#[test]
fn summary_numbers_paths_from_one() {
    let summary = sample_summary();
    assert_eq!(summary.count, 3);
    let indices: Vec<_> = summary.paths.iter().map(|entry| entry.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert_eq!(summary.paths[2].hops, 3);
}

#[test]
fn plain_text_lists_every_path() {
    let rendered = sample_summary().render(RenderMode::PlainText);
    assert!(rendered.starts_with("Skyline: 0 -> 5 (3 paths, pruning: skyline)"));
    assert!(rendered.contains("  1: 0 -> 1 -> 5 (2 hops)"));
    assert!(rendered.contains("attributes: [5, 5, 1, 1]"));
    assert!(rendered.contains("  3: 0 -> 2 -> 3 -> 5 (3 hops)"));
    assert!(rendered.contains("1 partial prunes, 1 full prunes"));
}

#[test]
fn compact_mode_is_one_line_per_path() {
    let rendered = sample_summary().render(RenderMode::Compact);
    assert_eq!(
        rendered,
        "0 -> 1 -> 5 [2, 2, 10, 4]\n0 -> 5 [5, 5, 1, 1]\n0 -> 2 -> 3 -> 5 [4, 4, 3, 5]\n"
    );
}

#[test]
fn baseline_is_marked_when_in_skyline() {
    let graph = sample_graph();
    let objective = Objective::Total;
    let nodes = ShortestPathFinder::new(objective)
        .find(&graph, 0, 5)
        .expect("valid objective")
        .expect("reachable");
    let attributes = path_attributes(&graph, &SumAggregator, &nodes).expect("attributes");
    assert_eq!(nodes, vec![0, 5]);

    let summary = sample_summary().with_baseline(objective, Some(nodes), Some(attributes));
    let baseline = summary.baseline.as_ref().expect("baseline attached");
    assert!(baseline.in_skyline);
    assert!(summary
        .render(RenderMode::PlainText)
        .contains("Shortest (total): 0 -> 5 [5, 5, 1, 1]\n"));
}

#[test]
fn json_output_uses_snake_case_fields() {
    let summary = sample_summary().with_baseline(Objective::Dimension(0), None, None);
    let value = serde_json::to_value(&summary).expect("serialises");

    assert_eq!(value["pruning"], "skyline");
    assert_eq!(value["paths"][0]["attributes"], serde_json::json!([2.0, 2.0, 10.0, 4.0]));
    assert_eq!(value["stats"]["partial_prunes"], 1);
    assert_eq!(value["baseline"]["objective"], serde_json::json!({ "dimension": 0 }));
    assert!(value["baseline"].get("nodes").is_none());
}
