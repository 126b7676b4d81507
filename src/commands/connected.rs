//! `arrakis connected` command - depth-first reachability check

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::{print_json, print_records};
use arrakis_core::error::Result;
use arrakis_core::graph::{connectivity, ConnectivityReport};
use arrakis_core::records::connectivity_records;

/// Execute the connected command
pub fn execute(cli: &Cli, map: &LoadedMap, start: &str) -> Result<()> {
    let report = connectivity(&map.graph, start)?;

    output_by_format_result!(cli.format,
        json => print_json(&report),
        human => {
            print_human(cli, &report);
        },
        records => {
            print_records(connectivity_records(map.name(), &report));
        }
    )
}

pub(crate) fn print_human(cli: &Cli, report: &ConnectivityReport) {
    if report.connected {
        println!("The map is connected.");
    } else {
        println!("The map is not connected.");
    }
    if cli.quiet {
        return;
    }
    println!(
        "{} of {} locations reachable from {}",
        report.reachable, report.total, report.start
    );
    if !report.unreachable.is_empty() {
        println!("Unreachable: {}", report.unreachable.join(", "));
    }
}
