//! Arrakis - route planner for the desert map of Dune
//!
//! Finds shortest routes, checks connectivity, enumerates routes around a
//! dangerous location and explores the map depth-first.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use arrakis_core::error::{ArrakisError, ExitCode as ArrakisExitCode};
use arrakis_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Parsing failed before `Cli.format` exists, so JSON is detected from argv
        Err(err) if wants_json_errors(env::args().skip(1)) => {
            let err = clap_error_to_arrakis(err);
            eprintln!("{}", err.to_json());
            return exit_with(err.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(ArrakisExitCode::Success as u8),
        Err(e) => {
            report_error(&cli, &e);
            exit_with(e.exit_code() as u8)
        }
    }
}

fn exit_with(code: u8) -> ExitCode {
    ExitCode::from(code)
}

/// Print a command failure the way the selected format expects
fn report_error(cli: &Cli, e: &ArrakisError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", e),
    }
}

/// Translate a clap parse failure into the error reported in JSON mode.
/// Help and version requests still print and exit through clap.
fn clap_error_to_arrakis(err: clap::Error) -> ArrakisError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ArgumentConflict if conflicts_on_format(&err) => ArrakisError::DuplicateFormat,
        ErrorKind::ArgumentConflict
        | ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::MissingRequiredArgument => ArrakisError::UsageError(err.to_string()),
        _ => ArrakisError::Other(err.to_string()),
    }
}

/// True when the conflicting argument is `--format` itself
fn conflicts_on_format(err: &clap::Error) -> bool {
    matches!(
        err.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.starts_with("--format")
    )
}

/// Scan raw arguments for `--format json` or `--format=json`
fn wants_json_errors<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
