use crate::error::Result;
use crate::graph::algos::dfs::DepthFirst;
use crate::graph::types::ConnectivityReport;
use crate::graph::GraphProvider;

/// Whether every location is reachable from `start`.
///
/// A single-location map is connected. `start` must exist, so an empty map
/// cannot be checked.
pub fn is_connected(provider: &dyn GraphProvider, start: &str) -> Result<bool> {
    connectivity(provider, start).map(|report| report.connected)
}

/// Depth-first reachability report from `start`
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn connectivity(provider: &dyn GraphProvider, start: &str) -> Result<ConnectivityReport> {
    let mut walk = DepthFirst::new(provider, start)?;
    for step in walk.by_ref() {
        step?;
    }

    let visited = walk.visited();
    let total = provider.node_count();
    let unreachable: Vec<String> = provider
        .node_names()
        .into_iter()
        .filter(|name| !visited.contains(*name))
        .map(str::to_string)
        .collect();

    let report = ConnectivityReport {
        start: start.to_string(),
        connected: visited.len() == total,
        reachable: visited.len(),
        total,
        unreachable,
    };
    tracing::debug!(
        connected = report.connected,
        reachable = report.reachable,
        total = report.total,
        "connectivity"
    );
    Ok(report)
}
