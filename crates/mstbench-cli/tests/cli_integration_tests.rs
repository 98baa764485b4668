// Dweve MSTBench - Minimum Spanning Tree Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Test helper to create an mstbench command
fn mstbench_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mstbench").expect("Failed to find mstbench binary");
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn entry(id: u64, vertices: u64, edges: u64, prim_ms: f64, kruskal_ms: f64) -> String {
    format!(
        r#"{{"graph_id": {id}, "input_stats": {{"vertices": {vertices}, "edges": {edges}}},
            "prim": {{"total_cost": 10, "execution_time_ms": {prim_ms}, "operations_count": 100}},
            "kruskal": {{"total_cost": 10, "execution_time_ms": {kruskal_ms}, "operations_count": 50}}}}"#
    )
}

fn write_results(dir: &Path, name: &str, entries: &[String]) {
    let content = format!(r#"{{"results": [{}]}}"#, entries.join(","));
    fs::write(dir.join(name), content).expect("Failed to write results file");
}

// Results directory with vertices {10, 10, 200, 2000}
fn populated_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_results(
        dir.path(),
        "small_results.json",
        &[entry(1, 10, 20, 2.0, 1.0), entry(2, 10, 20, 2.0, 1.0)],
    );
    write_results(
        dir.path(),
        "large_results.json",
        &[entry(3, 200, 800, 4.0, 2.0), entry(4, 2000, 6000, 40.0, 20.0)],
    );
    dir
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    mstbench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_no_subcommand_fails() {
    mstbench_cmd().assert().failure();
}

// ===== Report Command Tests =====

#[test]
fn test_report_text() {
    let dir = populated_dir();
    mstbench_cmd()
        .arg("report")
        .arg("-d")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total graphs analyzed: 4"))
        .stdout(predicate::str::contains("Small (n<=50):"))
        .stdout(predicate::str::contains("Medium (51-300):"))
        .stdout(predicate::str::contains("Extra Large (n>1000):"))
        .stdout(predicate::str::contains("Large (301-1000)").not())
        .stdout(predicate::str::contains(
            "CONCLUSION: Kruskal is 2.00x faster than Prim on average",
        ));
}

#[test]
fn test_report_json() {
    let dir = populated_dir();
    let output = mstbench_cmd()
        .args(["report", "--format", "json", "-d"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["overall"]["count"], 4);
    assert_eq!(json["categories"].as_array().unwrap().len(), 3);
}

#[test]
fn test_report_reversed_pair() {
    let dir = populated_dir();
    mstbench_cmd()
        .args(["report", "--pair", "kruskal/prim", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Time ratio Kruskal/Prim: 0.500"))
        .stdout(predicate::str::contains("Kruskal is 2.00x faster than Prim"));
}

#[test]
fn test_report_invalid_pair() {
    let dir = populated_dir();
    mstbench_cmd()
        .args(["report", "--pair", "prim/prim", "-d"])
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn test_report_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    mstbench_cmd()
        .arg("report")
        .arg("-d")
        .arg(dir.path().join("nowhere"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_report_no_records_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad_results.json"), "{ broken").unwrap();
    mstbench_cmd()
        .arg("report")
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to analyze"));
}

#[test]
fn test_report_skips_malformed_file() {
    let dir = populated_dir();
    fs::write(dir.path().join("broken_results.json"), "not json").unwrap();
    mstbench_cmd()
        .arg("report")
        .arg("-d")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total graphs analyzed: 4"))
        .stderr(predicate::str::contains("1 file(s) or entries skipped"));
}

#[test]
fn test_report_custom_suffix() {
    let dir = tempfile::tempdir().unwrap();
    write_results(dir.path(), "run.out.json", &[entry(1, 10, 20, 1.0, 1.0)]);
    mstbench_cmd()
        .args(["report", "--suffix", ".out.json", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total graphs analyzed: 1"))
        .stdout(predicate::str::contains("Prim and Kruskal are equally fast"));
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_clean_directory() {
    let dir = populated_dir();
    mstbench_cmd()
        .arg("validate")
        .arg("-d")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains(format!(
            "4 valid record(s) from 2 file(s) in {}",
            dir.path().display()
        )));
}

#[test]
fn test_validate_reports_bad_entry() {
    let dir = populated_dir();
    let bad = r#"{"graph_id": 7, "input_stats": {"vertices": 5, "edges": 4},
        "prim": {"total_cost": 1, "execution_time_ms": 1, "operations_count": 1}}"#;
    write_results(dir.path(), "partial_results.json", &[bad.to_string()]);
    mstbench_cmd()
        .arg("validate")
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "partial_results.json [entry 0]: missing required field 'kruskal'",
        ));
}

// ===== Export Command Tests =====

#[test]
fn test_export_csv_files() {
    let dir = populated_dir();
    let out = tempfile::tempdir().unwrap();
    let records = out.path().join("records.csv");
    let aggregates = out.path().join("aggregates.csv");

    mstbench_cmd()
        .arg("export")
        .arg("-d")
        .arg(dir.path())
        .arg("--records")
        .arg(&records)
        .arg("--aggregates")
        .arg(&aggregates)
        .assert()
        .success();

    let records = fs::read_to_string(records).unwrap();
    assert_eq!(records.lines().count(), 5);
    assert!(records.starts_with("source_file,graph_id,vertices,edges,density,category,"));

    let aggregates = fs::read_to_string(aggregates).unwrap();
    let scopes: Vec<&str> = aggregates
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(
        scopes,
        vec!["Overall", "Small (n<=50)", "Medium (51-300)", "Extra Large (n>1000)"]
    );
}

#[test]
fn test_export_json_to_stdout() {
    let dir = populated_dir();
    let output = mstbench_cmd()
        .args(["export", "--format", "json", "-d"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["metrics"]["time_ratio"], 2.0);
}

#[test]
fn test_export_same_path_rejected() {
    let dir = populated_dir();
    let out = tempfile::tempdir().unwrap();
    let table = out.path().join("table.csv");
    mstbench_cmd()
        .arg("export")
        .arg("-d")
        .arg(dir.path())
        .arg("--records")
        .arg(&table)
        .arg("--aggregates")
        .arg(&table)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be different files"));
    assert!(!table.exists());
}
