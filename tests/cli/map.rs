use crate::cli::support::{arrakis, write_map};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Map command and map file loading tests
// ============================================================================

#[test]
fn test_map_lists_locations() {
    arrakis()
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arrakis: 7 locations, 9 edges"))
        .stdout(predicate::str::contains(
            "Arrakeen: Sietch Tabr, Oasis del Norte, Campamento Fremen",
        ));
}

#[test]
fn test_map_json() {
    let output = arrakis()
        .args(["--format", "json", "map"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Arrakis");
    assert_eq!(json["locations"].as_array().unwrap().len(), 7);
    assert_eq!(json["edges"].as_array().unwrap().len(), 9);
}

#[test]
fn test_unnamed_map_takes_file_name() {
    let dir = tempdir().unwrap();
    let map = write_map(
        dir.path(),
        r#"
[[locations]]
name = "a"
neighbors = ["b"]

[[locations]]
name = "b"
neighbors = ["a"]
"#,
    );

    arrakis()
        .arg("--map")
        .arg(&map)
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("map: 2 locations, 1 edges"))
        .stdout(predicate::str::contains("Arrakis").not());
}

#[test]
fn test_missing_map_file() {
    let dir = tempdir().unwrap();

    arrakis()
        .arg("--map")
        .arg(dir.path().join("nope.toml"))
        .arg("map")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("map file not found"));
}

#[test]
fn test_asymmetric_map_is_invalid() {
    let dir = tempdir().unwrap();
    let map = write_map(
        dir.path(),
        r#"
[[locations]]
name = "a"
neighbors = ["b"]

[[locations]]
name = "b"
"#,
    );

    let output = arrakis()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "map"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_map");
}

#[test]
fn test_malformed_map_is_failure() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "[[locations]\nname = 1");

    arrakis()
        .arg("--map")
        .arg(&map)
        .arg("map")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
