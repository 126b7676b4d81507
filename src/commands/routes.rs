//! `arrakis routes` command - every route around a forbidden location

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::{print_json, print_records};
use arrakis_core::error::Result;
use arrakis_core::graph::{safe_routes, RouteOptions, RoutesResult};
use arrakis_core::records::routes_records;

/// Execute the routes command
pub fn execute(
    cli: &Cli,
    map: &LoadedMap,
    from: &str,
    to: &str,
    opts: &RouteOptions,
) -> Result<()> {
    let result = safe_routes(&map.graph, from, to, opts)?;

    output_by_format_result!(cli.format,
        json => print_json(&result),
        human => {
            print_human(cli, &result);
        },
        records => {
            print_records(routes_records(map.name(), &result));
        }
    )
}

pub(crate) fn print_human(cli: &Cli, result: &RoutesResult) {
    if !cli.quiet {
        match &result.avoid {
            Some(avoid) => println!(
                "Safe routes from {} to {} avoiding {}:",
                result.from, result.to, avoid
            ),
            None => println!("Routes from {} to {}:", result.from, result.to),
        }
    }
    if result.routes.is_empty() {
        println!("No routes found");
    }
    for route in &result.routes {
        println!("{}", route);
    }
    if result.truncated && !cli.quiet {
        println!("(stopped after {} routes)", result.routes.len());
    }
}
