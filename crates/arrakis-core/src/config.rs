//! Map configuration for arrakis
//!
//! A map file is TOML: a list of `[[locations]]` with their neighbors, an
//! optional `[scenario]` naming the fixed arguments used by the tour and the
//! benchmarks, and an optional `[bench]` section. Without a file the
//! built-in Arrakis map is used.
//!
//! A map file never inherits the Arrakis scenario: commands that need one
//! fail with `InvalidMap` naming the missing key.

pub mod defaults;
pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid_map;
use crate::error::{ArrakisError, Result};
use crate::graph::traversal::require_location;
use crate::graph::{Graph, GraphProvider};

pub use types::{BenchConfig, LocationConfig, MapConfig, Scenario, ScenarioConfig};

/// Environment variable naming a map file to load instead of the built-in map
pub const MAP_ENV_VAR: &str = "ARRAKIS_MAP";

impl Default for MapConfig {
    fn default() -> Self {
        Self::arrakis()
    }
}

impl MapConfig {
    /// The built-in Arrakis desert map
    pub fn arrakis() -> Self {
        MapConfig {
            name: defaults::MAP_NAME.to_string(),
            locations: defaults::ARRAKIS
                .iter()
                .map(|(name, neighbors)| LocationConfig {
                    name: name.to_string(),
                    neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
                })
                .collect(),
            scenario: ScenarioConfig::arrakis(),
            bench: BenchConfig::default(),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ArrakisError::not_found("map file", path.display()),
            _ => ArrakisError::Io(e),
        })?;
        let mut config = Self::parse(&content)?;
        if config.name.is_empty() {
            config.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "map".to_string());
        }
        tracing::debug!(
            path = %path.display(),
            locations = config.locations.len(),
            "load_map"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in map
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: MapConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the settings a graph cannot check by itself
    pub fn validate(&self) -> Result<()> {
        if self.locations.is_empty() {
            bail_invalid_map!("no locations defined");
        }
        if self.bench.trials == 0 {
            return Err(ArrakisError::invalid_value("bench.trials", 0));
        }
        Ok(())
    }

    /// Build the immutable graph described by this configuration
    pub fn to_graph(&self) -> Result<Graph> {
        self.validate()?;
        Graph::from_adjacency(
            self.locations
                .iter()
                .map(|loc| (loc.name.clone(), loc.neighbors.clone())),
        )
    }
}

impl MapConfig {
    /// Start location for commands given none: the scenario start, else
    /// the first declared location
    pub fn default_start(&self) -> &str {
        self.scenario
            .start
            .as_deref()
            .or_else(|| self.locations.first().map(|loc| loc.name.as_str()))
            .unwrap_or_default()
    }

    /// Complete the `[scenario]` section and check it against `graph`
    pub fn resolve_scenario(&self, graph: &Graph) -> Result<Scenario> {
        let scenario = &self.scenario;
        if scenario.is_empty() {
            bail_invalid_map!("map '{}' has no [scenario] section", self.name);
        }

        let required = |value: &Option<String>, key: &str| -> Result<String> {
            value.clone().ok_or_else(|| {
                ArrakisError::invalid_map(format!("[scenario] is missing `{}`", key))
            })
        };
        let resolved = Scenario {
            from: required(&scenario.from, "from")?,
            to: required(&scenario.to, "to")?,
            route_from: required(&scenario.route_from, "route_from")?,
            route_to: required(&scenario.route_to, "route_to")?,
            avoid: scenario.avoid.clone(),
            start: self.default_start().to_string(),
        };
        resolved.check(graph)?;
        Ok(resolved)
    }
}

impl Scenario {
    /// Fail with `LocationNotFound` when the scenario names a location the
    /// map lacks
    pub fn check(&self, provider: &dyn GraphProvider) -> Result<()> {
        for name in [
            &self.from,
            &self.to,
            &self.route_from,
            &self.route_to,
            &self.start,
        ] {
            require_location(provider, name)?;
        }
        if let Some(avoid) = &self.avoid {
            require_location(provider, avoid)?;
        }
        Ok(())
    }
}
