//! Default command - tour of the configured scenario
//!
//! Runs the four traversals in turn: shortest path, connectivity, routes
//! around the dangerous location, and exploration.

use serde::Serialize;

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::{print_json, print_records};
use crate::commands::{connected, explore, path, routes};
use arrakis_core::error::Result;
use arrakis_core::graph::{
    connectivity, safe_routes, shortest_path, ConnectivityReport, ExploreResult, PathResult,
    RouteOptions, RoutesResult,
};
use arrakis_core::records;

#[derive(Serialize)]
struct TourOutput<'a> {
    map: &'a str,
    path: PathResult,
    connectivity: ConnectivityReport,
    routes: RoutesResult,
    exploration: ExploreResult,
}

/// Execute the tour
pub fn execute(cli: &Cli, map: &LoadedMap) -> Result<()> {
    let scenario = map.config.resolve_scenario(&map.graph)?;

    let path_result = shortest_path(&map.graph, &scenario.from, &scenario.to)?;
    let report = connectivity(&map.graph, &scenario.start)?;
    let opts = RouteOptions {
        avoid: scenario.avoid.clone(),
        max_routes: None,
    };
    let routes_result = safe_routes(&map.graph, &scenario.route_from, &scenario.route_to, &opts)?;

    output_by_format_result!(cli.format,
        json => {
            let exploration = explore::run(cli, map, &scenario.start)?;
            print_json(&TourOutput {
                map: map.name(),
                path: path_result,
                connectivity: report,
                routes: routes_result,
                exploration,
            })
        },
        human => {
            path::print_human(cli, &path_result);
            connected::print_human(cli, &report);
            println!();
            routes::print_human(cli, &routes_result);
            println!();
            if !cli.quiet {
                println!("Exploring from {}:", scenario.start);
            }
            let exploration = explore::run(cli, map, &scenario.start)?;
            explore::print_order(&exploration);
        },
        records => {
            let exploration = explore::run(cli, map, &scenario.start)?;
            let name = map.name();
            print_records(records::path_records(name, &path_result));
            print_records(records::connectivity_records(name, &report));
            print_records(records::routes_records(name, &routes_result));
            print_records(records::explore_records(name, &exploration));
        }
    )
}
