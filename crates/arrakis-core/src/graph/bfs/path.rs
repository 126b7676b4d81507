use crate::graph::types::Route;
use std::collections::HashMap;

/// Walk predecessor links back from `to` until the origin, which has none,
/// then reverse into origin-to-destination order.
pub(super) fn reconstruct_route(predecessors: &HashMap<&str, &str>, to: &str) -> Route {
    let mut stops = vec![to.to_string()];
    let mut current = to;

    while let Some(&pred) = predecessors.get(current) {
        stops.push(pred.to_string());
        current = pred;
    }

    stops.reverse();
    Route::new(stops)
}
