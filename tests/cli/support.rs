use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

/// Get a Command for arrakis
pub fn arrakis() -> Command {
    let mut cmd = cargo_bin_cmd!("arrakis");
    cmd.env_remove("ARRAKIS_MAP")
        .env_remove("ARRAKIS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a map file into `dir` and return its path
pub fn write_map(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("map.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// A small map where `d` is only reachable through `c`
pub const DIAMOND_MAP: &str = r#"
name = "Diamond"

[[locations]]
name = "a"
neighbors = ["b", "c"]

[[locations]]
name = "b"
neighbors = ["a", "c"]

[[locations]]
name = "c"
neighbors = ["a", "b", "d"]

[[locations]]
name = "d"
neighbors = ["c"]

[scenario]
from = "a"
to = "d"
route_from = "a"
route_to = "d"
avoid = "b"
start = "a"

[bench]
trials = 2
"#;
