//! Arrakis Core Library
//!
//! Graph traversal logic for the Arrakis route planner: the map model,
//! breadth-first and depth-first searches, rendering and benchmarking.

pub mod bench;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod render;
