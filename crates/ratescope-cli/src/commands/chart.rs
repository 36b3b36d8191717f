//! Chart command implementation.
//!
//! Projects a date range of the series into a renderable chart.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use ratescope_chart::{ChartResponse, LineSeries, SeriesSelection};
use ratescope_core::Date;

use crate::cli::OutputFormat;
use crate::commands::RangeArgs;
use crate::context::Context;
use crate::output::{format_walk, print_csv, print_header, print_json, print_table};

/// Arguments for the chart command.
#[derive(Args, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Lines to draw. Defaults to the configured selection.
    #[arg(short, long, value_enum)]
    pub series: Option<SeriesChoice>,

    /// Dark theme
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Light theme
    #[arg(long)]
    pub light: bool,
}

impl ChartArgs {
    /// Theme switch position, falling back to the configured one.
    fn dark_theme(&self, configured: bool) -> bool {
        if self.dark {
            true
        } else if self.light {
            false
        } else {
            configured
        }
    }
}

/// Series selection choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesChoice {
    /// Bank rate only
    #[value(name = "rate")]
    Rate,
    /// Random walk only
    #[value(name = "random-walk")]
    RandomWalk,
    /// Both lines
    #[value(name = "both")]
    Both,
}

impl From<SeriesChoice> for SeriesSelection {
    fn from(choice: SeriesChoice) -> Self {
        match choice {
            SeriesChoice::Rate => SeriesSelection::Rate,
            SeriesChoice::RandomWalk => SeriesSelection::RandomWalk,
            SeriesChoice::Both => SeriesSelection::Both,
        }
    }
}

/// One plotted sample.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ChartRow {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Series")]
    series: String,
    #[tabled(rename = "Value", display_with = "format_walk")]
    value: f64,
}

/// Value column of a single line.
#[derive(Debug, Clone, Tabled)]
struct LineRow {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Value", display_with = "format_walk")]
    value: f64,
}

fn chart_rows(response: &ChartResponse) -> Vec<ChartRow> {
    response
        .chart
        .series
        .iter()
        .flat_map(|line| {
            line.points.iter().map(move |p| ChartRow {
                date: p.date,
                series: line.name.clone(),
                value: p.value,
            })
        })
        .collect()
}

fn print_line(line: &LineSeries, quiet: bool) -> Result<()> {
    if !quiet {
        print_header(&format!(
            "{} ({}, {:?})",
            line.name,
            line.style.color.name(),
            line.style.dash
        ));
    }
    let rows: Vec<LineRow> = line
        .points
        .iter()
        .map(|p| LineRow {
            date: p.date,
            value: p.value,
        })
        .collect();
    print_table(&rows)?;
    println!(
        "Latest: {} ({} on {})",
        line.annotation.text,
        line.annotation.text_color.name(),
        line.annotation.background.name()
    );
    Ok(())
}

/// Execute the chart command.
pub fn execute(args: ChartArgs, ctx: &Context) -> Result<()> {
    let projector = ctx.projector()?;
    let selection = args
        .series
        .map_or(ctx.config.default_selection, SeriesSelection::from);
    let dark_theme = args.dark_theme(ctx.config.dark_theme);

    let request = args.range.request(projector.series(), selection, dark_theme)?;
    debug!(?request, "chart request");
    let response = projector.project(&request)?;

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&response.chart.title);
                println!("{}", response.range_label);
                println!("Theme: {}", response.chart.template);
            }
            for line in &response.chart.series {
                print_line(line, ctx.quiet)?;
            }
        }
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Csv => print_csv(&chart_rows(&response))?,
        OutputFormat::Minimal => println!("{}", response.range_label),
    }

    Ok(())
}
