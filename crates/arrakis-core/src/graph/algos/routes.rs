use crate::error::Result;
use crate::graph::traversal::require_location;
use crate::graph::types::{Route, RouteOptions, RoutesResult};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Enumerate every simple route from `from` to `to` that never passes
/// through `opts.avoid`.
///
/// The frontier holds whole partial routes, starting from `[from]`. A
/// dequeued route ending at `to` is recorded and not extended; any other
/// route is extended by each neighbor that is neither avoided nor already on
/// the route. Routes therefore come out in non-decreasing hop order.
///
/// The number of partial routes grows exponentially with map density. Use
/// `opts.max_routes` to stop early; the result is then marked truncated.
#[tracing::instrument(skip(provider, opts), fields(from = %from, to = %to, avoid = ?opts.avoid, max_routes = ?opts.max_routes))]
pub fn safe_routes(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    opts: &RouteOptions,
) -> Result<RoutesResult> {
    require_location(provider, from)?;
    require_location(provider, to)?;
    let avoid = opts.avoid.as_deref();
    if let Some(avoid) = avoid {
        require_location(provider, avoid)?;
    }

    let mut routes: Vec<Route> = Vec::new();
    let mut truncated = false;

    // A route cannot start or end on the avoided location
    let blocked = avoid.is_some_and(|a| a == from || a == to);

    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    if !blocked {
        queue.push_back(vec![from]);
    }

    while let Some(partial) = queue.pop_front() {
        let current = partial[partial.len() - 1];

        if current == to {
            if opts.max_routes.is_some_and(|max| routes.len() >= max) {
                truncated = true;
                break;
            }
            routes.push(Route::new(partial.iter().map(|s| s.to_string()).collect()));
            continue;
        }

        for neighbor in provider.neighbors(current)? {
            let neighbor = neighbor.as_str();
            if Some(neighbor) == avoid || partial.contains(&neighbor) {
                continue;
            }
            let mut extended = partial.clone();
            extended.push(neighbor);
            queue.push_back(extended);
        }
    }

    tracing::debug!(routes = routes.len(), truncated, "safe_routes");

    Ok(RoutesResult {
        from: from.to_string(),
        to: to.to_string(),
        avoid: opts.avoid.clone(),
        truncated,
        routes,
    })
}
