use crate::error::Result;
use crate::graph::algos::dfs::DepthFirst;
use crate::graph::types::ExploreResult;
use crate::graph::GraphProvider;

/// Depth-first exploration order from `start`
pub fn explore(provider: &dyn GraphProvider, start: &str) -> Result<ExploreResult> {
    explore_with(provider, start, |_| {})
}

/// Depth-first exploration that reports each location to `on_visit` the
/// moment it is first reached, before its neighbors are explored.
#[tracing::instrument(skip(provider, on_visit), fields(start = %start))]
pub fn explore_with<F>(
    provider: &dyn GraphProvider,
    start: &str,
    mut on_visit: F,
) -> Result<ExploreResult>
where
    F: FnMut(&str),
{
    let mut order = Vec::new();
    for step in DepthFirst::new(provider, start)? {
        let name = step?;
        tracing::trace!(location = %name, "visit");
        on_visit(&name);
        order.push(name);
    }

    tracing::debug!(visited = order.len(), "explore");
    Ok(ExploreResult {
        start: start.to_string(),
        order,
    })
}
