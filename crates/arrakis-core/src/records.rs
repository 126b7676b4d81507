//! Records output format
//!
//! Line-oriented output for scripts and LLM context injection. Every block
//! starts with a header line (`H arrakis=1 records=1 map="..." mode=...`)
//! followed by one line per item, keyed by a single-letter prefix:
//!
//! - `S` route stop, `R` enumerated route
//! - `U` unreachable location, `V` visited location
//! - `N` location, `E` edge
//! - `B` benchmark result

use crate::bench::BenchReport;
use crate::graph::{ConnectivityReport, ExploreResult, Graph, PathResult, RoutesResult};

/// Escape a string for a quoted records field: `\` becomes `\\`, then `"`
/// becomes `\"`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}

/// Header line shared by every records block
pub fn header(map: &str, mode: &str, fields: &str) -> String {
    let mut line = format!("H arrakis=1 records=1 map={} mode={}", quoted(map), mode);
    if !fields.is_empty() {
        line.push(' ');
        line.push_str(fields);
    }
    line
}

pub fn path_records(map: &str, result: &PathResult) -> Vec<String> {
    let mut lines = vec![header(
        map,
        "path",
        &format!(
            "from={} to={} found={} hops={}",
            quoted(&result.from),
            quoted(&result.to),
            result.found,
            result.hops
        ),
    )];
    for (i, stop) in result.route.stops.iter().enumerate() {
        lines.push(format!("S {} {}", i, quoted(stop)));
    }
    lines
}

pub fn routes_records(map: &str, result: &RoutesResult) -> Vec<String> {
    let avoid = result
        .avoid
        .as_deref()
        .map(quoted)
        .unwrap_or_else(|| "-".to_string());
    let mut lines = vec![header(
        map,
        "routes",
        &format!(
            "from={} to={} avoid={} routes={} truncated={}",
            quoted(&result.from),
            quoted(&result.to),
            avoid,
            result.routes.len(),
            result.truncated
        ),
    )];
    for (i, route) in result.routes.iter().enumerate() {
        let stops: Vec<String> = route.stops.iter().map(|s| quoted(s)).collect();
        lines.push(format!("R {} hops={} {}", i, route.hops(), stops.join(" ")));
    }
    lines
}

pub fn connectivity_records(map: &str, report: &ConnectivityReport) -> Vec<String> {
    let mut lines = vec![header(
        map,
        "connected",
        &format!(
            "start={} connected={} reachable={} total={}",
            quoted(&report.start),
            report.connected,
            report.reachable,
            report.total
        ),
    )];
    for name in &report.unreachable {
        lines.push(format!("U {}", quoted(name)));
    }
    lines
}

pub fn explore_records(map: &str, result: &ExploreResult) -> Vec<String> {
    let mut lines = vec![header(
        map,
        "explore",
        &format!(
            "start={} visited={}",
            quoted(&result.start),
            result.order.len()
        ),
    )];
    for (i, name) in result.order.iter().enumerate() {
        lines.push(format!("V {} {}", i, quoted(name)));
    }
    lines
}

pub fn map_records(map: &str, graph: &Graph) -> Vec<String> {
    let edges = graph.edges();
    let mut lines = vec![header(
        map,
        "map",
        &format!("locations={} edges={}", graph.len(), edges.len()),
    )];
    for (name, neighbors) in graph.adjacency() {
        lines.push(format!("N {} degree={}", quoted(name), neighbors.len()));
    }
    for (a, b) in edges {
        lines.push(format!("E {} {}", quoted(a), quoted(b)));
    }
    lines
}

pub fn bench_records(map: &str, report: &BenchReport) -> Vec<String> {
    let mut lines = vec![header(
        map,
        "bench",
        &format!(
            "trials={} started_at={}",
            report.trials,
            report.started_at.to_rfc3339()
        ),
    )];
    for result in &report.results {
        lines.push(format!(
            "B {} total={:.6} per_trial={:.9}",
            result.name,
            result.total.as_secs_f64(),
            result.per_trial.as_secs_f64()
        ));
    }
    lines
}
