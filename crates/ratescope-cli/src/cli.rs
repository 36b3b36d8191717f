//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{ChartArgs, ConfigArgs, RangeArgs};

/// Ratescope - Bank rate history and random walk explorer
#[derive(Parser)]
#[command(name = "ratescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to ./ratescope.toml when present.
    #[arg(short, long, env = "RATESCOPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Rate history CSV, overriding the configured data file
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the prepared daily series
    Summary,

    /// Project a date range into a chart
    Chart(ChartArgs),

    /// Show range slider marks
    Marks(RangeArgs),

    /// List daily rate and random walk values
    Points(RangeArgs),

    /// Inspect the effective configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
