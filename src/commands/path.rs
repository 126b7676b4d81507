//! `arrakis path` command - shortest route between two locations

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::{print_json, print_records};
use arrakis_core::error::Result;
use arrakis_core::graph::{shortest_path, PathResult};
use arrakis_core::records::path_records;

/// Execute the path command
pub fn execute(cli: &Cli, map: &LoadedMap, from: &str, to: &str) -> Result<()> {
    let result = shortest_path(&map.graph, from, to)?;

    output_by_format_result!(cli.format,
        json => print_json(&result),
        human => {
            print_human(cli, &result);
        },
        records => {
            print_records(path_records(map.name(), &result));
        }
    )
}

pub(crate) fn print_human(cli: &Cli, result: &PathResult) {
    if !result.found {
        println!("No route from {} to {}", result.from, result.to);
    } else if cli.quiet {
        println!("{}", result.route);
    } else {
        println!(
            "Shortest route from {} to {}: {} ({} {})",
            result.from,
            result.to,
            result.route,
            result.hops,
            if result.hops == 1 { "hop" } else { "hops" }
        );
    }
}
