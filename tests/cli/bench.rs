use crate::cli::support::{arrakis, write_map, DIAMOND_MAP};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Bench command tests
// ============================================================================

#[test]
fn test_bench_human() {
    arrakis()
        .args(["bench", "--trials", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timing 3 runs of each algorithm"))
        .stdout(predicate::str::contains("shortest_path"))
        .stdout(predicate::str::contains("connectivity"))
        .stdout(predicate::str::contains("safe_routes"))
        .stdout(predicate::str::contains("explore"));
}

#[test]
fn test_bench_json_uses_map_trials() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), DIAMOND_MAP);

    let output = arrakis()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "bench"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["trials"], 2);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r["total"].as_f64().unwrap() >= 0.0));
}

#[test]
fn test_bench_records() {
    arrakis()
        .args(["--format", "records", "bench", "--trials", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=bench trials=1"))
        .stdout(predicate::str::contains("B safe_routes total="));
}

#[test]
fn test_bench_zero_trials_rejected() {
    arrakis().args(["bench", "--trials", "0"]).assert().code(2);
}

#[test]
fn test_bench_needs_scenario_section() {
    let dir = tempdir().unwrap();
    let map = write_map(
        dir.path(),
        r#"
[[locations]]
name = "a"
"#,
    );

    arrakis()
        .arg("--map")
        .arg(&map)
        .arg("bench")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no [scenario] section"));
}

#[test]
fn test_bench_scenario_must_exist_in_map() {
    let dir = tempdir().unwrap();
    let map = write_map(
        dir.path(),
        r#"
[[locations]]
name = "a"

[scenario]
from = "a"
to = "a"
route_from = "a"
route_to = "Arrakeen"
"#,
    );

    arrakis()
        .arg("--map")
        .arg(&map)
        .arg("bench")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found: Arrakeen"));
}
