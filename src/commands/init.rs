//! `arrakis init` command - write the built-in map as an editable TOML file

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::helpers::print_json;
use arrakis_core::config::MapConfig;
use arrakis_core::error::{ArrakisError, Result};
use arrakis_core::records::{escape_quotes, header};

/// Execute the init command
pub fn execute(cli: &Cli, file: &Path) -> Result<()> {
    let config = MapConfig::default();
    create_map_file(file, &config)?;
    tracing::debug!(file = %file.display(), "init");

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "file": file.display().to_string(),
            "map": config.name,
            "locations": config.locations.len(),
        })),
        human => {
            if !cli.quiet {
                println!("Wrote {} map to {}", config.name, file.display());
                println!();
                println!("Run `arrakis --map {} map` to use it.", file.display());
            }
        },
        records => {
            println!(
                "{}",
                header(
                    &config.name,
                    "init",
                    &format!(
                        "file=\"{}\" status=ok",
                        escape_quotes(&file.display().to_string())
                    )
                )
            );
        }
    )
}

/// Write `config` to a file that must not exist yet
fn create_map_file(file: &Path, config: &MapConfig) -> Result<()> {
    let content = config.to_toml()?;
    let mut out = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ArrakisError::already_exists("map file", file.display()),
            _ => ArrakisError::Io(e),
        })?;
    out.write_all(content.as_bytes())?;
    Ok(())
}
