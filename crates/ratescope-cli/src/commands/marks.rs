//! Marks command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use ratescope_chart::SeriesSelection;

use crate::cli::OutputFormat;
use crate::commands::RangeArgs;
use crate::context::Context;
use crate::output::{print_header, print_output};

/// One labelled slider position.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
struct MarkRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Label")]
    label: String,
}

/// Execute the marks command.
///
/// With no range, shows the marks at both ends of the series.
pub fn execute(args: RangeArgs, ctx: &Context) -> Result<()> {
    let projector = ctx.projector()?;
    let marks = if args.is_set() {
        let request = args.request(projector.series(), SeriesSelection::Both, false)?;
        projector.slider_marks(request.start_index, request.end_index)?
    } else {
        projector.initial_marks()
    };

    let rows: Vec<MarkRow> = marks
        .into_iter()
        .map(|(index, label)| MarkRow { index, label })
        .collect();

    match ctx.format {
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.label);
            }
        }
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Slider Marks");
            }
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, ctx.format)?,
    }

    Ok(())
}
