//! Points command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use ratescope_chart::SeriesSelection;
use ratescope_core::series::SeriesPoint;
use ratescope_core::Date;

use crate::cli::OutputFormat;
use crate::commands::RangeArgs;
use crate::context::Context;
use crate::output::{format_rate, format_walk, print_header, print_output};

/// One day of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
struct PointRow {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Bank Rate", display_with = "format_rate")]
    rate: f64,
    #[tabled(rename = "Random Walk", display_with = "format_walk")]
    random_walk: f64,
}

impl From<SeriesPoint> for PointRow {
    fn from(point: SeriesPoint) -> Self {
        Self {
            date: point.date,
            rate: point.rate,
            random_walk: point.random_walk,
        }
    }
}

/// Execute the points command.
pub fn execute(args: RangeArgs, ctx: &Context) -> Result<()> {
    let series = ctx.load_series()?;
    let request = args.request(&series, SeriesSelection::Both, false)?;
    let (start, end) = (request.start_index, request.end_index);
    let rows: Vec<PointRow> = series.points(start, end)?.map(PointRow::from).collect();

    match ctx.format {
        OutputFormat::Minimal => println!("{}", rows.len()),
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!(
                    "Daily Series ({} to {})",
                    series.dates()[start],
                    series.dates()[end]
                ));
            }
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, ctx.format)?,
    }

    Ok(())
}
