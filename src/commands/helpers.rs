//! Helper functions shared across commands

use serde::Serialize;

use arrakis_core::error::Result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print records lines on stdout
pub fn print_records(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
