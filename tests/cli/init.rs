use crate::cli::support::arrakis;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_writes_default_map() {
    let dir = tempdir().unwrap();

    arrakis()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Arrakis map to arrakis.toml"));

    let content = std::fs::read_to_string(dir.path().join("arrakis.toml")).unwrap();
    assert!(content.contains("[[locations]]"));
    assert!(content.contains("Montaña de la Especia"));
    assert!(content.contains("[scenario]"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "keep me").unwrap();

    arrakis()
        .arg("init")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
}

#[test]
fn test_init_then_use_map() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dune.toml");

    arrakis().arg("init").arg(&path).assert().success();

    arrakis()
        .arg("--map")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The map is connected."));
}

#[test]
fn test_init_json() {
    let dir = tempdir().unwrap();

    let output = arrakis()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["locations"], 7);
}
