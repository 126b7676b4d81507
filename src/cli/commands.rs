//! Subcommands and their arguments

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::parse::{parse_positive, parse_render_style};
use arrakis_core::render::RenderStyle;

/// Top-level arrakis commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest route between two locations (breadth-first)
    Path(PathArgs),

    /// Check that every location is reachable (depth-first)
    Connected(ConnectedArgs),

    /// Every route between two locations, optionally avoiding one
    Routes(RoutesArgs),

    /// Depth-first exploration order from a location
    Explore(ExploreArgs),

    /// Draw the map as a Graphviz or Mermaid diagram
    Render(RenderArgs),

    /// Time the traversal algorithms on the configured scenario
    Bench(BenchArgs),

    /// List locations and their neighbors
    Map,

    /// Write the built-in map to a TOML file
    Init(InitArgs),
}

/// Arguments for the path command.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Origin location
    pub from: String,

    /// Destination location
    pub to: String,
}

/// Arguments for the connected command.
#[derive(Args, Debug)]
pub struct ConnectedArgs {
    /// Location to start from (defaults to the scenario start, else the
    /// first location)
    #[arg(long, short)]
    pub start: Option<String>,
}

/// Arguments for the routes command.
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Origin location
    pub from: String,

    /// Destination location
    pub to: String,

    /// Location no route may pass through
    #[arg(long, short)]
    pub avoid: Option<String>,

    /// Stop after this many routes
    #[arg(long)]
    pub max_routes: Option<usize>,
}

/// Arguments for the explore command.
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// Location to start from (defaults to the scenario start, else the
    /// first location)
    pub start: Option<String>,
}

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Highlight the shortest route between two locations
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    pub path: Vec<String>,

    /// Highlight the exploration order from a location
    #[arg(long)]
    pub explore: Option<String>,

    /// Write the diagram to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Diagram syntax (dot, mermaid)
    #[arg(long, default_value = "dot", value_parser = parse_render_style)]
    pub style: RenderStyle,
}

/// Arguments for the bench command.
#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Runs per algorithm (defaults to the map's bench.trials)
    #[arg(long, short, value_parser = parse_positive)]
    pub trials: Option<u32>,
}

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// File to create
    #[arg(default_value = "arrakis.toml")]
    pub file: PathBuf,
}
