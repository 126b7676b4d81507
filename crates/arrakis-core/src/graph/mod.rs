//! Graph model and traversal operations
//!
//! Provides graph algorithms for navigating the location map:
//! - BFS shortest-path search
//! - DFS connectivity check and exploration order
//! - BFS enumeration of safe routes around a forbidden location
//! - Graph provider trait for pluggable data sources

pub mod algos;
pub mod bfs;
pub mod model;
pub mod traversal;
pub mod types;

pub use algos::{connectivity, explore, explore_with, is_connected, safe_routes};
pub use bfs::shortest_path;
pub use model::Graph;
pub use traversal::GraphProvider;
pub use types::{ConnectivityReport, ExploreResult, PathResult, Route, RouteOptions, RoutesResult};
