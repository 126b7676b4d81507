use crate::cli::support::arrakis;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Render command tests
// ============================================================================

#[test]
fn test_render_dot_to_stdout() {
    arrakis()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph \"Arrakis\" {"))
        .stdout(predicate::str::contains("\"Arrakeen\" -- \"Sietch Tabr\""))
        .stdout(predicate::str::contains("penwidth").not());
}

#[test]
fn test_render_highlights_path() {
    arrakis()
        .args(["render", "--path", "Arrakeen", "Oasis del Norte"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"Arrakeen\" -- \"Oasis del Norte\" [color=red, penwidth=4];",
        ));
}

#[test]
fn test_render_mermaid_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("map.mmd");

    arrakis()
        .args(["render", "--style", "mermaid", "--explore", "Arrakeen", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote mermaid diagram to"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("flowchart LR"));
    assert!(content.contains("-.-"));
    assert!(content.contains("stroke:green"));
}

#[test]
fn test_render_unknown_style() {
    arrakis()
        .args(["render", "--style", "png"])
        .assert()
        .code(2);
}

#[test]
fn test_render_path_needs_two_locations() {
    arrakis()
        .args(["render", "--path", "Arrakeen"])
        .assert()
        .code(2);
}

#[test]
fn test_render_json() {
    let output = arrakis()
        .args(["--format", "json", "render", "--style", "mermaid"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["style"], "mermaid");
    assert!(json["diagram"].as_str().unwrap().contains("flowchart LR"));
}
