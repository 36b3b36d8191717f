//! Renderable chart description.
//!
//! These types carry everything a UI needs to draw the chart and nothing
//! about how: no layout, no CSS. They serialize to JSON for any renderer.

use serde::Serialize;

use ratescope_core::Date;

use crate::request::Theme;
use crate::style::{Color, LineStyle, SeriesKind};

/// Chart title.
pub const CHART_TITLE: &str = "Bank Rate and Random Walk Over Time";
/// X axis title.
pub const X_AXIS_TITLE: &str = "Date";
/// Y axis title.
pub const Y_AXIS_TITLE: &str = "Value";

/// A single `(date, value)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// X value.
    pub date: Date,
    /// Y value.
    pub value: f64,
}

/// Latest-value tag drawn at the right end of a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndAnnotation {
    /// Date of the last point.
    pub date: Date,
    /// Value of the last point.
    pub value: f64,
    /// Text shown, the value to two decimals.
    pub text: String,
    /// Box fill, the line's own color.
    pub background: Color,
    /// Text color chosen for contrast against `background`.
    pub text_color: Color,
}

impl EndAnnotation {
    /// Tags `point` with a box in `background`.
    #[must_use]
    pub fn new(point: ChartPoint, background: Color) -> Self {
        Self {
            date: point.date,
            value: point.value,
            text: format!("{:.2}", point.value),
            background,
            text_color: background.contrasting_text(),
        }
    }
}

/// One named line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    /// Legend name.
    pub name: String,
    /// Which series this is.
    pub kind: SeriesKind,
    /// Stroke.
    pub style: LineStyle,
    /// Samples in date order.
    pub points: Vec<ChartPoint>,
    /// Tag for the last sample.
    pub annotation: EndAnnotation,
}

impl LineSeries {
    /// Zips aligned date and value slices into a styled line.
    ///
    /// Both slices must be equal length and non-empty.
    pub(crate) fn from_slices(kind: SeriesKind, dates: &[Date], values: &[f64]) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        let points: Vec<ChartPoint> = dates
            .iter()
            .zip(values)
            .map(|(&date, &value)| ChartPoint { date, value })
            .collect();
        let style = kind.style();
        let annotation = EndAnnotation::new(points[points.len() - 1], style.color);

        Self {
            name: kind.name().to_string(),
            kind,
            style,
            points,
            annotation,
        }
    }

    /// Y values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

/// Axis title and grid flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    /// Axis title.
    pub title: String,
    /// Whether grid lines are drawn.
    pub show_grid: bool,
}

impl Axis {
    fn gridded(title: &str) -> Self {
        Self {
            title: title.to_string(),
            show_grid: true,
        }
    }
}

/// Legend anchor in paper coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    /// Horizontal position (0 = left).
    pub x: f64,
    /// Vertical position (1 = top).
    pub y: f64,
}

impl Default for Legend {
    fn default() -> Self {
        Self { x: 0.01, y: 0.99 }
    }
}

/// Full chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// X axis.
    pub x_axis: Axis,
    /// Y axis.
    pub y_axis: Axis,
    /// Theme the chart was styled for.
    pub theme: Theme,
    /// Template identifier for the renderer.
    pub template: String,
    /// Legend placement.
    pub legend: Legend,
    /// Lines in draw order.
    pub series: Vec<LineSeries>,
}

impl ChartSpec {
    pub(crate) fn new(theme: Theme, series: Vec<LineSeries>) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_axis: Axis::gridded(X_AXIS_TITLE),
            y_axis: Axis::gridded(Y_AXIS_TITLE),
            theme,
            template: theme.template().to_string(),
            legend: Legend::default(),
            series,
        }
    }

    /// Legend names in draw order.
    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    /// Line of the given kind, if drawn.
    pub fn line(&self, kind: SeriesKind) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

/// Everything one interaction produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResponse {
    /// `"Selected Range: <start> to <end>"`.
    pub range_label: String,
    /// Chart to draw.
    pub chart: ChartSpec,
}
