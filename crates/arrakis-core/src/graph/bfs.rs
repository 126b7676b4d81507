mod path;

use crate::error::Result;
use crate::graph::traversal::require_location;
use crate::graph::types::{PathResult, Route};
use crate::graph::GraphProvider;
use path::reconstruct_route;
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-first search from `from`, returning the predecessor map when
/// `to` is dequeued.
///
/// Nodes are marked visited when they are enqueued so no node is queued twice.
fn bfs_search<'g>(
    provider: &'g dyn GraphProvider,
    from: &'g str,
    to: &str,
) -> Result<Option<HashMap<&'g str, &'g str>>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    queue.push_back(from);
    visited.insert(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return Ok(Some(predecessors));
        }

        for neighbor in provider.neighbors(current)? {
            let neighbor = neighbor.as_str();
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(None)
}

/// Find the minimum-hop route between two locations.
///
/// Ties between equally short routes go to the one discovered first in
/// adjacency order. An unreachable destination is not an error: the result
/// has `found = false`, an empty route and zero hops.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn shortest_path(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<PathResult> {
    require_location(provider, from)?;
    require_location(provider, to)?;

    let route = match bfs_search(provider, from, to)? {
        Some(predecessors) => reconstruct_route(&predecessors, to),
        None => Route::default(),
    };

    let found = !route.is_empty();
    let hops = route.hops();
    tracing::debug!(found, hops, "shortest_path");

    Ok(PathResult {
        from: from.to_string(),
        to: to.to_string(),
        found,
        route,
        hops,
    })
}
