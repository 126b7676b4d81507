//! CLI argument parsing for arrakis
//!
//! Uses clap for argument parsing.
//! Supports global flags: --map, --format, --quiet, --verbose

pub mod commands;
pub mod format;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

use arrakis_core::config::MAP_ENV_VAR;
pub use arrakis_core::format::OutputFormat;
pub use commands::Commands;
use parse::parse_output_format;

/// Arrakis - route planner for the desert map of Dune
#[derive(Parser, Debug)]
#[command(name = "arrakis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Map file (TOML) to use instead of the built-in Arrakis map
    #[arg(long, global = true, env = MAP_ENV_VAR)]
    pub map: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, arrakis_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
