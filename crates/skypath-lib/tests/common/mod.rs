//! Shared fixtures for integration tests.

use std::path::PathBuf;

use skypath_lib::{load_graph, Graph, LoadOptions, NodeId};

/// Path to the fixtures directory shared by the workspace.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The four-attribute sample network (nodes 0..=5).
#[allow(dead_code)]
pub fn sample_graph() -> Graph {
    let dir = fixtures_dir();
    load_graph(
        Some(dir.join("sample_nodes.csv").as_path()),
        &dir.join("sample_edges.csv"),
        4,
        LoadOptions::default(),
    )
    .expect("sample fixture loads")
}

/// Build a graph from `(from, to, attributes)` triples, declaring nodes as
/// they appear.
#[allow(dead_code)]
pub fn graph_from_edges(dimension: usize, edges: &[(NodeId, NodeId, &[f64])]) -> Graph {
    let mut builder = Graph::builder(dimension);
    for &(from, to, attributes) in edges {
        builder.ensure_node(from).ensure_node(to);
        builder
            .add_edge(from, to, attributes.to_vec())
            .expect("fixture edge is valid");
    }
    builder.build()
}
