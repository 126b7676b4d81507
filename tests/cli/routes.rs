use crate::cli::support::{arrakis, write_map, DIAMOND_MAP};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Routes command tests
// ============================================================================

#[test]
fn test_routes_avoiding_danger() {
    arrakis()
        .args([
            "routes",
            "Arrakeen",
            "Montaña de la Especia",
            "--avoid",
            "Zona Peligrosa",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Safe routes from Arrakeen to Montaña de la Especia avoiding Zona Peligrosa:",
        ))
        .stdout(predicate::str::contains(
            "Arrakeen -> Campamento Fremen -> Oasis del Este -> Sietch Tabr -> Montaña de la Especia",
        ))
        .stdout(predicate::str::contains("Zona Peligrosa ->").not());
}

#[test]
fn test_routes_json_order() {
    let output = arrakis()
        .args([
            "--format",
            "json",
            "routes",
            "Arrakeen",
            "Montaña de la Especia",
            "--avoid",
            "Zona Peligrosa",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let routes = json["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(
        routes[0],
        serde_json::json!(["Arrakeen", "Sietch Tabr", "Montaña de la Especia"])
    );
    assert_eq!(json["truncated"], false);
}

#[test]
fn test_routes_max_routes() {
    let output = arrakis()
        .args([
            "--format",
            "json",
            "routes",
            "Arrakeen",
            "Montaña de la Especia",
            "--max-routes",
            "2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["routes"].as_array().unwrap().len(), 2);
    assert_eq!(json["truncated"], true);
}

#[test]
fn test_routes_zero_max_routes_is_usage_error() {
    arrakis()
        .args(["routes", "Arrakeen", "Sietch Tabr", "--max-routes", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_routes_unknown_avoid_is_data_error() {
    arrakis()
        .args(["routes", "Arrakeen", "Sietch Tabr", "--avoid", "Caladan"])
        .assert()
        .code(3);
}

#[test]
fn test_routes_cut_vertex_leaves_none() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), DIAMOND_MAP);

    arrakis()
        .arg("--map")
        .arg(&map)
        .args(["routes", "a", "d", "--avoid", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No routes found"));
}
