//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dfs`: Depth-first pre-order walk shared by the DFS algorithms
//! - `connectivity`: Reachability check from a start location
//! - `explore`: Depth-first visitation order
//! - `routes`: Breadth-first enumeration of simple routes avoiding a location

pub mod connectivity;
pub mod dfs;
pub mod explore;
pub mod routes;

pub use connectivity::{connectivity, is_connected};
pub use dfs::DepthFirst;
pub use explore::{explore, explore_with};
pub use routes::safe_routes;
