//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use arrakis_core::config::MapConfig;
use arrakis_core::error::Result;
use arrakis_core::graph::Graph;

use super::trace_command;

/// A map configuration together with the graph built from it
pub struct LoadedMap {
    pub config: MapConfig,
    pub graph: Graph,
}

impl LoadedMap {
    pub fn name(&self) -> &str {
        &self.config.name
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the map named by `--map` (or `ARRAKIS_MAP`), or the built-in map
    pub fn load_map(&self) -> Result<LoadedMap> {
        let config = MapConfig::load_or_default(self.cli.map.as_deref())?;
        let graph = config.to_graph()?;
        trace_command!(self.cli, self.start, "load_map");
        Ok(LoadedMap { config, graph })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Runs the tour of the configured scenario when no subcommand is provided
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let map = ctx.load_map()?;
        crate::commands::tour::execute(ctx.cli, &map)
    }
}
