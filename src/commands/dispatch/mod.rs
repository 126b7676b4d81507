//! Command dispatch logic for arrakis

use std::time::Instant;

use crate::cli::Cli;
use arrakis_core::error::Result;

mod command;
mod commands;
mod macros;

pub use command::{Command, CommandContext, LoadedMap, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
