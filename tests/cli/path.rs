use crate::cli::support::{arrakis, write_map, DIAMOND_MAP};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Path command tests
// ============================================================================

#[test]
fn test_path_multi_hop() {
    arrakis()
        .args(["path", "Arrakeen", "Zona Peligrosa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Arrakeen -> Sietch Tabr -> Oasis del Este -> Zona Peligrosa (3 hops)",
        ));
}

#[test]
fn test_path_same_location() {
    let output = arrakis()
        .args(["--format", "json", "path", "Arrakeen", "Arrakeen"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["hops"], 0);
    assert_eq!(json["route"], serde_json::json!(["Arrakeen"]));
}

#[test]
fn test_path_quiet_prints_route_only() {
    arrakis()
        .args(["--quiet", "path", "Arrakeen", "Oasis del Norte"])
        .assert()
        .success()
        .stdout("Arrakeen -> Oasis del Norte\n");
}

#[test]
fn test_path_records() {
    arrakis()
        .args(["--format", "records", "path", "Arrakeen", "Oasis del Norte"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H arrakis=1 records=1 map=\"Arrakis\" mode=path",
        ))
        .stdout(predicate::str::contains("S 1 \"Oasis del Norte\""));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
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

[[locations]]
name = "island"
"#,
    );

    arrakis()
        .arg("--map")
        .arg(&map)
        .args(["path", "a", "island"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from a to island"));
}

#[test]
fn test_path_with_map_from_env() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), DIAMOND_MAP);

    arrakis()
        .env("ARRAKIS_MAP", &map)
        .args(["path", "b", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b -> c -> d (2 hops)"));
}
