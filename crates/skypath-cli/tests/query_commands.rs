use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    cargo_bin_cmd!("skypath-cli")
}

fn query_command() -> Command {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .env_remove("SKYPATH_CONFIG")
        .arg("query")
        .arg("--edges")
        .arg(fixture("sample_edges.csv"))
        .arg("--nodes")
        .arg(fixture("sample_nodes.csv"));
    cmd
}

#[test]
fn text_output_lists_skyline_paths() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0", "--to", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Skyline: 0 -> 5 (3 paths, pruning: skyline)",
        ))
        .stdout(predicate::str::contains("  1: 0 -> 1 -> 5 (2 hops)"))
        .stdout(predicate::str::contains("attributes: [2, 2, 10, 4]"))
        .stdout(predicate::str::contains("  3: 0 -> 2 -> 3 -> 5 (3 hops)"))
        .stdout(predicate::str::contains("Skyline search: "));
}

#[test]
fn compact_format_prints_one_line_per_path() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0", "--to", "5"])
        .args(["--format", "compact"]);

    cmd.assert().success().stdout(predicate::eq(
        "0 -> 1 -> 5 [2, 2, 10, 4]\n0 -> 5 [5, 5, 1, 1]\n0 -> 2 -> 3 -> 5 [4, 4, 3, 5]\n",
    ));
}

#[test]
fn json_format_is_structured() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0", "--to", "5"])
        .args(["--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["count"], 3);
    assert_eq!(value["pruning"], "skyline");
    assert_eq!(value["paths"][1]["nodes"], serde_json::json!([0, 5]));
}

#[test]
fn pruning_flag_selects_single_slot() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0", "--to", "5"])
        .args(["--pruning", "single-slot"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pruning: single_slot"));
}

#[test]
fn config_file_is_read_from_environment() {
    let mut cmd = query_command();
    cmd.env("SKYPATH_CONFIG", fixture("engine.json"))
        .args(["--from", "0", "--to", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(3 paths, pruning: single_slot)"));
}

#[test]
fn compare_shortest_reports_baseline() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0", "--to", "5"])
        .arg("--compare-shortest");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest (total): 0 -> 5 [5, 5, 1, 1]\n",
        ))
        .stdout(predicate::str::contains("Shortest search: "));
}

#[test]
fn compare_shortest_accepts_dimension_objective() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0", "--to", "5"])
        .args(["--compare-shortest", "--objective", "0"]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Shortest (dimension 0): 0 -> 1 -> 5 [2, 2, 10, 4]",
    ));
}

#[test]
fn undirected_flag_allows_reverse_queries() {
    let mut directed = query_command();
    directed.args(["--dimension", "4", "--from", "5", "--to", "0"]);
    directed
        .assert()
        .success()
        .stdout(predicate::str::contains("Skyline: 5 -> 0 (0 paths"));

    let mut undirected = query_command();
    undirected
        .args(["--dimension", "4", "--from", "5", "--to", "0"])
        .arg("--undirected");
    undirected
        .assert()
        .success()
        .stdout(predicate::str::contains("Skyline: 5 -> 0 (0 paths").not())
        .stdout(predicate::str::contains("5 -> 0 (1 hops)"));
}

#[test]
fn missing_destination_is_reported() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "missing query argument: target is required",
    ));
}

#[test]
fn unknown_node_is_reported() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "0", "--to", "42"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown node: 42"));
}

#[test]
fn identical_endpoints_are_rejected() {
    let mut cmd = query_command();
    cmd.args(["--dimension", "4", "--from", "3", "--to", "3"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "source and destination must differ",
    ));
}

#[test]
fn dimension_or_config_is_required() {
    let mut cmd = query_command();
    cmd.args(["--from", "0", "--to", "5"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "either --dimension or --config must be provided",
    ));
}

#[test]
fn malformed_edge_file_names_the_line() {
    let dir = tempdir().expect("create temp dir");
    let edges = dir.path().join("edges.csv");
    fs::write(&edges, "0,1,1,1\n1,2,oops,1\n").expect("write edges");

    cli()
        .env("RUST_LOG", "error")
        .env_remove("SKYPATH_CONFIG")
        .arg("query")
        .arg("--edges")
        .arg(&edges)
        .args(["--dimension", "2", "--from", "0", "--to", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load graph from"))
        .stderr(predicate::str::contains(
            "invalid graph record on line 2: invalid attribute value 'oops'",
        ));
}
