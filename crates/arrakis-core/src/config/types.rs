//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults;

/// Map configuration: the locations plus the fixed arguments used by the
/// tour and the benchmarks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Display name of the map (the file stem when omitted from a map file)
    #[serde(default)]
    pub name: String,

    /// Locations with their neighbor lists, in declaration order
    #[serde(default)]
    pub locations: Vec<LocationConfig>,

    /// Fixed arguments for the tour and the benchmark suite
    #[serde(default)]
    pub scenario: ScenarioConfig,

    /// Benchmark settings
    #[serde(default)]
    pub bench: BenchConfig,
}

/// A single location and the locations it connects to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    #[serde(default)]
    pub neighbors: Vec<String>,
}

/// Fixed arguments for each algorithm, as written in the `[scenario]`
/// section. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Shortest-path origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Shortest-path destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Safe-route origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_from: Option<String>,

    /// Safe-route destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_to: Option<String>,

    /// Location safe routes must avoid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid: Option<String>,

    /// Start for the connectivity check and the exploration (the first
    /// declared location when omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl ScenarioConfig {
    /// The scenario of the built-in Arrakis map
    pub fn arrakis() -> Self {
        Self {
            from: Some(defaults::PATH_FROM.to_string()),
            to: Some(defaults::PATH_TO.to_string()),
            route_from: Some(defaults::ROUTE_FROM.to_string()),
            route_to: Some(defaults::ROUTE_TO.to_string()),
            avoid: Some(defaults::AVOID.to_string()),
            start: Some(defaults::START.to_string()),
        }
    }

    /// True when the map file has no `[scenario]` settings at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A complete scenario whose locations all exist in the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub from: String,
    pub to: String,
    pub route_from: String,
    pub route_to: String,
    pub avoid: Option<String>,
    pub start: String,
}

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Runs of each algorithm per batch
    #[serde(default = "default_trials")]
    pub trials: u32,
}

fn default_trials() -> u32 {
    defaults::TRIALS
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
        }
    }
}
