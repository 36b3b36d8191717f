//! Summary command implementation.

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::output::{print_csv, print_header, print_json, print_table, KeyValue};

/// Execute the summary command.
pub fn execute(ctx: &Context) -> Result<()> {
    let series = ctx.load_series()?;
    let summary = series.summary();

    let results = vec![
        KeyValue::new("Source", ctx.data_file().display().to_string()),
        KeyValue::new("First Date", summary.first_date.format_label()),
        KeyValue::new("Last Date", summary.last_date.format_label()),
        KeyValue::new("Days", summary.days.to_string()),
        KeyValue::from_f64("Latest Rate", summary.latest_rate, 2),
        KeyValue::from_f64("Min Rate", summary.min_rate, 2),
        KeyValue::from_f64("Max Rate", summary.max_rate, 2),
        KeyValue::new("Rate Changes", summary.rate_changes.to_string()),
        KeyValue::from_f64("Final Random Walk", summary.final_random_walk, 4),
        KeyValue::from_f64("Step Size", summary.step_size, 4),
        KeyValue::new("Seed", summary.seed.to_string()),
    ];

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Bank Rate Series");
            }
            print_table(&results)?;
        }
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Csv => print_csv(&results)?,
        OutputFormat::Minimal => println!("{:.2}", summary.latest_rate),
    }

    Ok(())
}
