use super::Benchmark;
use crate::config::Scenario;
use crate::error::Result;
use crate::graph::{explore, is_connected, safe_routes, shortest_path, Graph, RouteOptions};

/// The four traversal algorithms as closures over the scenario's fixed inputs
pub fn standard_suite<'g>(
    graph: &'g Graph,
    scenario: &'g Scenario,
) -> Result<Vec<Benchmark<'g>>> {
    scenario.check(graph)?;

    let route_opts = RouteOptions {
        avoid: scenario.avoid.clone(),
        max_routes: None,
    };

    Ok(vec![
        Benchmark::new("shortest_path", move || {
            shortest_path(graph, &scenario.from, &scenario.to).map(drop)
        }),
        Benchmark::new("connectivity", move || {
            is_connected(graph, &scenario.start).map(drop)
        }),
        Benchmark::new("safe_routes", move || {
            safe_routes(graph, &scenario.route_from, &scenario.route_to, &route_opts).map(drop)
        }),
        Benchmark::new("explore", move || explore(graph, &scenario.start).map(drop)),
    ])
}
