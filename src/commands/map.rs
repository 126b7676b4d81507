//! `arrakis map` command - list locations and their neighbors

use serde::Serialize;

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::{print_json, print_records};
use arrakis_core::error::Result;
use arrakis_core::records::map_records;

#[derive(Serialize)]
struct LocationOutput<'a> {
    name: &'a str,
    neighbors: &'a [String],
}

#[derive(Serialize)]
struct MapOutput<'a> {
    name: &'a str,
    locations: Vec<LocationOutput<'a>>,
    edges: Vec<(&'a str, &'a str)>,
}

/// Execute the map command
pub fn execute(cli: &Cli, map: &LoadedMap) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            let output = MapOutput {
                name: map.name(),
                locations: map
                    .graph
                    .adjacency()
                    .map(|(name, neighbors)| LocationOutput { name, neighbors })
                    .collect(),
                edges: map.graph.edges(),
            };
            print_json(&output)
        },
        human => {
            if !cli.quiet {
                println!(
                    "{}: {} locations, {} edges",
                    map.name(),
                    map.graph.len(),
                    map.graph.edges().len()
                );
                println!();
            }
            for (name, neighbors) in map.graph.adjacency() {
                println!("{}: {}", name, neighbors.join(", "));
            }
        },
        records => {
            print_records(map_records(map.name(), &map.graph));
        }
    )
}
