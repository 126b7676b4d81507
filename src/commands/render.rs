//! `arrakis render` command - draw the map with highlighted results

use std::fs;
use std::path::Path;

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::helpers::print_json;
use arrakis_core::error::Result;
use arrakis_core::graph::{explore, shortest_path};
use arrakis_core::records::{escape_quotes, header};
use arrakis_core::render::{render_to_string, Highlight, RenderStyle};

pub struct RenderOptions<'a> {
    pub path: Option<(&'a str, &'a str)>,
    pub explore: Option<&'a str>,
    pub output: Option<&'a Path>,
    pub style: RenderStyle,
}

/// Execute the render command
pub fn execute(cli: &Cli, map: &LoadedMap, options: RenderOptions) -> Result<()> {
    let route = match options.path {
        Some((from, to)) => Some(shortest_path(&map.graph, from, to)?.route),
        None => None,
    };
    let visits = match options.explore {
        Some(start) => Some(explore(&map.graph, start)?.order),
        None => None,
    };
    let highlight = Highlight {
        route: route.as_ref(),
        visits: visits.as_deref(),
    };

    let diagram = render_to_string(&map.graph, map.name(), &highlight, options.style)?;

    let Some(output) = options.output else {
        return output_by_format_result!(cli.format,
            json => print_json(&serde_json::json!({
                "map": map.name(),
                "style": options.style.to_string(),
                "diagram": diagram,
            })),
            human => {
                print!("{}", diagram);
            },
            records => {
                println!(
                    "{}",
                    header(
                        map.name(),
                        "render",
                        &format!("style={} lines={}", options.style, diagram.lines().count())
                    )
                );
                print!("{}", diagram);
            }
        );
    };

    fs::write(output, &diagram)?;
    tracing::debug!(output = %output.display(), style = %options.style, "render");

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "map": map.name(),
            "style": options.style.to_string(),
            "output": output.display().to_string(),
        })),
        human => {
            if !cli.quiet {
                println!("Wrote {} diagram to {}", options.style, output.display());
            }
        },
        records => {
            println!(
                "{}",
                header(
                    map.name(),
                    "render",
                    &format!(
                        "style={} output=\"{}\"",
                        options.style,
                        escape_quotes(&output.display().to_string())
                    )
                )
            );
        }
    )
}
