//! CLI command implementations.

pub mod chart;
pub mod config;
pub mod marks;
pub mod points;
pub mod summary;

// Re-export argument types for the parser
pub use chart::ChartArgs;
pub use config::ConfigArgs;

use clap::Args;

use ratescope_chart::{ChartRequest, SeriesSelection};
use ratescope_core::{DailySeries, Date};

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// An index or date range over the series. Unset bounds cover the whole series.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First index (0 = first day)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "from")]
    pub start: Option<i64>,

    /// Last index, inclusive
    #[arg(long, allow_negative_numbers = true, conflicts_with = "to")]
    pub end: Option<i64>,

    /// First date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
}

impl RangeArgs {
    /// True when any bound was given.
    pub fn is_set(&self) -> bool {
        self.start.is_some() || self.end.is_some() || self.from.is_some() || self.to.is_some()
    }

    /// Raw slider positions before clamping.
    pub fn raw_bounds(&self, series: &DailySeries) -> CliResult<(i64, i64)> {
        let last = i64::try_from(series.len()).unwrap_or(i64::MAX) - 1;
        let start = match (self.start, &self.from) {
            (Some(index), _) => index,
            (None, Some(date)) => offset(series, parse_date(date)?),
            (None, None) => 0,
        };
        let end = match (self.end, &self.to) {
            (Some(index), _) => index,
            (None, Some(date)) => offset(series, parse_date(date)?),
            (None, None) => last,
        };
        Ok((start, end))
    }

    /// Clamped chart request for this range.
    pub fn request(
        &self,
        series: &DailySeries,
        selection: SeriesSelection,
        dark_theme: bool,
    ) -> CliResult<ChartRequest> {
        let (start, end) = self.raw_bounds(series)?;
        Ok(ChartRequest::clamped(
            start,
            end,
            series.len(),
            selection,
            dark_theme,
        )?)
    }
}

/// Position of `date` on the series calendar; may fall outside it.
fn offset(series: &DailySeries, date: Date) -> i64 {
    series.first_date().days_between(&date)
}
