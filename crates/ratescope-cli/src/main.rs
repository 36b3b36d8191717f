//! Ratescope CLI - Bank rate history and random walk explorer.
//!
//! # Usage
//!
//! ```bash
//! # Summarize the series built from the configured CSV
//! ratescope summary
//!
//! # Chart a date range as JSON
//! ratescope -f json chart --from 2022-01-01 --to 2023-12-31 --series both
//!
//! # Slider marks for an index range
//! ratescope marks --start 100 --end 400
//!
//! # Daily values as CSV from another file
//! ratescope --data rates.csv -f csv points
//!
//! # Check the configuration and data file
//! ratescope --config ratescope.toml config validate
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod context;
mod error;
mod logging;
mod output;

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve configuration before logging so its filter applies
    let ctx = Context::load(&cli)?;
    logging::init(&logging::directive(
        cli.verbose,
        cli.quiet,
        &ctx.config.log_filter,
    ))?;
    debug!(config = %ctx.config_origin(), data = %ctx.data_file().display(), "configuration resolved");

    // Execute command
    match cli.command {
        Commands::Summary => commands::summary::execute(&ctx)?,
        Commands::Chart(args) => commands::chart::execute(args, &ctx)?,
        Commands::Marks(args) => commands::marks::execute(args, &ctx)?,
        Commands::Points(args) => commands::points::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
