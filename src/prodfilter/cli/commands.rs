//! # CLI Layer
//!
//! One UI client for the library. This is the only place that parses
//! arguments, installs logging, reads display configuration and writes to
//! the terminal.

use super::logging::init_logging;
use super::print::{print_messages, print_sections};
use super::setup::{Cli, Commands};
use clap::Parser;
use prodfilter::api::{parse_criterion, CmdResult, FilterApi};
use prodfilter::config::DisplayConfig;
use prodfilter::error::Result;
use prodfilter::model::{Color, Size};
use prodfilter::spec::ProductSpec;
use tracing::debug;

struct AppContext {
    api: FilterApi,
    config: DisplayConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(cli.no_color)?;

    let result = match cli.command {
        None | Some(Commands::Demo) => ctx.api.demo()?,
        Some(Commands::List {
            colors,
            sizes,
            criteria,
        }) => handle_list(&ctx, colors, sizes, &criteria)?,
    };

    render(&ctx, &result);
    Ok(())
}

fn init_context(no_color: bool) -> Result<AppContext> {
    let config_dir = DisplayConfig::config_dir();
    let config = DisplayConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), ?config, "loaded display config");

    if no_color || !config.color {
        colored::control::set_override(false);
    }

    Ok(AppContext {
        api: FilterApi::with_sample_catalog(),
        config,
    })
}

fn handle_list(
    ctx: &AppContext,
    colors: Vec<Color>,
    sizes: Vec<Size>,
    criteria: &[String],
) -> Result<CmdResult> {
    let spec = build_spec(colors, sizes, criteria)?;
    ctx.api.list(&spec)
}

/// Flags first, then positional criteria, all joined into one conjunction.
fn build_spec(colors: Vec<Color>, sizes: Vec<Size>, criteria: &[String]) -> Result<ProductSpec> {
    let mut specs: Vec<ProductSpec> = colors
        .into_iter()
        .map(ProductSpec::color)
        .chain(sizes.into_iter().map(ProductSpec::size))
        .collect();

    for criterion in criteria {
        specs.push(parse_criterion(criterion)?);
    }

    Ok(ProductSpec::all(specs))
}

fn render(ctx: &AppContext, result: &CmdResult) {
    print_sections(&result.sections, &ctx.config);
    print_messages(&result.messages);
}
