//! `arrakis explore` command - depth-first exploration order

use crate::cli::format::output_by_format_result;
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::{print_json, print_records};
use arrakis_core::error::Result;
use arrakis_core::graph::{explore, explore_with, ExploreResult};
use arrakis_core::records::explore_records;

/// Execute the explore command
pub fn execute(cli: &Cli, map: &LoadedMap, start: &str) -> Result<()> {
    let result = run(cli, map, start)?;

    output_by_format_result!(cli.format,
        json => print_json(&result),
        human => {
            print_order(&result);
        },
        records => {
            print_records(explore_records(map.name(), &result));
        }
    )
}

/// Explore from `start`, announcing each visit when printing for humans
pub(crate) fn run(cli: &Cli, map: &LoadedMap, start: &str) -> Result<ExploreResult> {
    if cli.format == OutputFormat::Human && !cli.quiet {
        explore_with(&map.graph, start, |name| println!("Visiting: {}", name))
    } else {
        explore(&map.graph, start)
    }
}

pub(crate) fn print_order(result: &ExploreResult) {
    println!("Exploration order: {}", result.order.join(" -> "));
}
