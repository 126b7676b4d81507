//! Command implementations for all arrakis commands

use crate::cli::commands::{
    BenchArgs, ConnectedArgs, ExploreArgs, InitArgs, PathArgs, RenderArgs, RoutesArgs,
};
use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use arrakis_core::bail_usage;
use arrakis_core::error::Result;
use arrakis_core::graph::RouteOptions;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => execute_path(ctx, args),
            Commands::Connected(args) => execute_connected(ctx, args),
            Commands::Routes(args) => execute_routes(ctx, args),
            Commands::Explore(args) => execute_explore(ctx, args),
            Commands::Render(args) => execute_render(ctx, args),
            Commands::Bench(args) => execute_bench(ctx, args),
            Commands::Map => execute_map(ctx),
            Commands::Init(args) => execute_init(ctx, args),
        }
    }
}

fn execute_path(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let map = ctx.load_map()?;
    crate::commands::path::execute(ctx.cli, &map, &args.from, &args.to)
}

fn execute_connected(ctx: &CommandContext, args: &ConnectedArgs) -> Result<()> {
    let map = ctx.load_map()?;
    let start = args
        .start
        .clone()
        .unwrap_or_else(|| map.config.default_start().to_string());
    crate::commands::connected::execute(ctx.cli, &map, &start)
}

fn execute_routes(ctx: &CommandContext, args: &RoutesArgs) -> Result<()> {
    if args.max_routes == Some(0) {
        bail_usage!("--max-routes must be at least 1");
    }
    let map = ctx.load_map()?;
    let opts = RouteOptions {
        avoid: args.avoid.clone(),
        max_routes: args.max_routes,
    };
    crate::commands::routes::execute(ctx.cli, &map, &args.from, &args.to, &opts)
}

fn execute_explore(ctx: &CommandContext, args: &ExploreArgs) -> Result<()> {
    let map = ctx.load_map()?;
    let start = args
        .start
        .clone()
        .unwrap_or_else(|| map.config.default_start().to_string());
    crate::commands::explore::execute(ctx.cli, &map, &start)
}

fn execute_render(ctx: &CommandContext, args: &RenderArgs) -> Result<()> {
    let map = ctx.load_map()?;
    let path = match args.path.as_slice() {
        [] => None,
        [from, to] => Some((from.as_str(), to.as_str())),
        _ => bail_usage!("--path takes exactly two locations: FROM TO"),
    };
    crate::commands::render::execute(
        ctx.cli,
        &map,
        crate::commands::render::RenderOptions {
            path,
            explore: args.explore.as_deref(),
            output: args.output.as_deref(),
            style: args.style,
        },
    )
}

fn execute_bench(ctx: &CommandContext, args: &BenchArgs) -> Result<()> {
    let map = ctx.load_map()?;
    let trials = args.trials.unwrap_or(map.config.bench.trials);
    crate::commands::bench::execute(ctx.cli, &map, trials)
}

fn execute_map(ctx: &CommandContext) -> Result<()> {
    let map = ctx.load_map()?;
    crate::commands::map::execute(ctx.cli, &map)
}

fn execute_init(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
    crate::commands::init::execute(ctx.cli, &args.file)
}
