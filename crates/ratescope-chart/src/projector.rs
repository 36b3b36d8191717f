//! Range-query projection from a daily series to a chart.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::trace;

use ratescope_core::error::check_range;
use ratescope_core::{DailySeries, Date, ScopeResult};

use crate::marks;
use crate::request::{ChartRequest, SeriesSelection};
use crate::spec::{ChartResponse, ChartSpec, LineSeries};
use crate::style::SeriesKind;

/// Formats the human-readable range label.
#[must_use]
pub fn range_label(start: Date, end: Date) -> String {
    format!(
        "Selected Range: {} to {}",
        start.format_label(),
        end.format_label()
    )
}

/// Projects `series[start..=end]` into a chart and range label.
///
/// Pure: the same series and request always give the same response.
///
/// # Errors
///
/// Returns `ScopeError::RangeError` if `start_index > end_index` or
/// `end_index >= series.len()`. Out-of-range input is rejected, never clamped.
///
/// # Example
///
/// ```rust
/// use ratescope_core::prelude::*;
/// use ratescope_chart::{project, ChartRequest, SeriesSelection};
///
/// let records = vec![
///     RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 5.0),
///     RateRecord::new(Date::from_ymd(2023, 1, 5).unwrap(), 5.25),
/// ];
/// let series = build(&records, Date::from_ymd(2023, 1, 6).unwrap(), 0.05, 41).unwrap();
///
/// let request = ChartRequest::new(1, 3, SeriesSelection::Rate, false);
/// let response = project(&series, &request).unwrap();
/// assert_eq!(response.range_label, "Selected Range: 02 Jan 2023 to 04 Jan 2023");
/// assert_eq!(response.chart.series_names(), vec!["Bank Rate"]);
/// ```
pub fn project(series: &DailySeries, request: &ChartRequest) -> ScopeResult<ChartResponse> {
    let (start, end) = (request.start_index, request.end_index);
    check_range(start, end, series.len())?;

    let dates = &series.dates()[start..=end];
    let mut lines = Vec::with_capacity(2);
    if request.selection.includes_rate() {
        lines.push(LineSeries::from_slices(
            SeriesKind::BankRate,
            dates,
            &series.rate()[start..=end],
        ));
    }
    if request.selection.includes_random_walk() {
        lines.push(LineSeries::from_slices(
            SeriesKind::RandomWalk,
            dates,
            &series.random_walk()[start..=end],
        ));
    }

    trace!(start, end, selection = %request.selection, lines = lines.len(), "projected chart");

    Ok(ChartResponse {
        range_label: range_label(dates[0], dates[dates.len() - 1]),
        chart: ChartSpec::new(request.theme(), lines),
    })
}

/// Chart entry point bound to one shared, immutable series.
///
/// The series is built once at startup and handed in; every interaction
/// reads it through the same `Arc`.
#[derive(Debug, Clone)]
pub struct ChartProjector {
    series: Arc<DailySeries>,
}

impl ChartProjector {
    /// Binds a projector to a series.
    #[must_use]
    pub fn new(series: Arc<DailySeries>) -> Self {
        Self { series }
    }

    /// The bound series.
    #[must_use]
    pub fn series(&self) -> &DailySeries {
        &self.series
    }

    /// Shared handle to the bound series.
    #[must_use]
    pub fn shared_series(&self) -> Arc<DailySeries> {
        Arc::clone(&self.series)
    }

    /// See [`project`].
    pub fn project(&self, request: &ChartRequest) -> ScopeResult<ChartResponse> {
        project(&self.series, request)
    }

    /// Request for the whole series, the state before any interaction.
    pub fn initial_request(
        &self,
        selection: SeriesSelection,
        dark_theme: bool,
    ) -> ScopeResult<ChartRequest> {
        ChartRequest::full(self.series.len(), selection, dark_theme)
    }

    /// See [`marks::slider_marks`].
    pub fn slider_marks(&self, start: usize, end: usize) -> ScopeResult<BTreeMap<usize, String>> {
        marks::slider_marks(&self.series, start, end)
    }

    /// See [`marks::initial_marks`].
    #[must_use]
    pub fn initial_marks(&self) -> BTreeMap<usize, String> {
        marks::initial_marks(&self.series)
    }
}

impl From<DailySeries> for ChartProjector {
    fn from(series: DailySeries) -> Self {
        Self::new(Arc::new(series))
    }
}
