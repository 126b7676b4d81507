//! `arrakis bench` command - time the traversal algorithms

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::{print_json, print_records};
use arrakis_core::bench::{run_suite, standard_suite};
use arrakis_core::error::Result;
use arrakis_core::records::bench_records;

/// Execute the bench command
pub fn execute(cli: &Cli, map: &LoadedMap, trials: u32) -> Result<()> {
    let scenario = map.config.resolve_scenario(&map.graph)?;
    let suite = standard_suite(&map.graph, &scenario)?;
    let report = run_suite(&suite, trials)?;

    output_by_format_result!(cli.format,
        json => print_json(&report),
        human => {
            if !cli.quiet {
                println!("Timing {} runs of each algorithm", report.trials);
                println!();
            }
            for result in &report.results {
                println!(
                    "{:<14} {:.6} s total, {:.9} s per run",
                    result.name,
                    result.total.as_secs_f64(),
                    result.per_trial.as_secs_f64()
                );
            }
        },
        records => {
            print_records(bench_records(map.name(), &report));
        }
    )
}
