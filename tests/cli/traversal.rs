use crate::cli::support::{arrakis, write_map};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Connected and explore command tests
// ============================================================================

const SPLIT_MAP: &str = r#"
[[locations]]
name = "a"
neighbors = ["b"]

[[locations]]
name = "b"
neighbors = ["a"]

[[locations]]
name = "c"
neighbors = ["d"]

[[locations]]
name = "d"
neighbors = ["c"]
"#;

#[test]
fn test_connected_default_map() {
    arrakis()
        .arg("connected")
        .assert()
        .success()
        .stdout(predicate::str::contains("The map is connected."))
        .stdout(predicate::str::contains(
            "7 of 7 locations reachable from Arrakeen",
        ));
}

#[test]
fn test_connected_split_map() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), SPLIT_MAP);

    let output = arrakis()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "connected", "--start", "a"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["connected"], false);
    assert_eq!(json["reachable"], 2);
    assert_eq!(json["unreachable"], serde_json::json!(["c", "d"]));
}

#[test]
fn test_explore_prints_visits() {
    arrakis()
        .args(["explore", "Oasis del Norte"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Visiting: Oasis del Norte\nVisiting: Arrakeen\n",
        ))
        .stdout(predicate::str::contains("Exploration order: Oasis del Norte -> Arrakeen"));
}

#[test]
fn test_explore_json_has_no_visit_lines() {
    let output = arrakis()
        .args(["--format", "json", "explore"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "Arrakeen");
    assert_eq!(json["order"][1], "Sietch Tabr");
}

#[test]
fn test_explore_partial_map() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), SPLIT_MAP);

    arrakis()
        .arg("--map")
        .arg(&map)
        .args(["--format", "records", "explore", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=explore start=\"c\" visited=2"))
        .stdout(predicate::str::contains("V 1 \"d\""));
}

const PAIR_MAP: &str = r#"
[[locations]]
name = "a"
neighbors = ["b"]

[[locations]]
name = "b"
neighbors = ["a"]
"#;

#[test]
fn test_connected_without_scenario_starts_at_first_location() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), PAIR_MAP);

    arrakis()
        .arg("--map")
        .arg(&map)
        .arg("connected")
        .assert()
        .success()
        .stdout(predicate::str::contains("The map is connected."))
        .stdout(predicate::str::contains("2 of 2 locations reachable from a"));
}

#[test]
fn test_explore_without_scenario_starts_at_first_location() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), PAIR_MAP);

    arrakis()
        .arg("--map")
        .arg(&map)
        .arg("explore")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Visiting: a\nVisiting: b\n"));
}

#[test]
fn test_tour_without_scenario_names_missing_section() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), PAIR_MAP);

    arrakis()
        .arg("--map")
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no [scenario] section"))
        .stderr(predicate::str::contains("Arrakeen").not());
}
