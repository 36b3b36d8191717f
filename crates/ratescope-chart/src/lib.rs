//! # Ratescope Chart
//!
//! Turns one user interaction (an inclusive index range, a series selection,
//! and a theme flag) into a renderable chart description and a range label.
//!
//! The projector only reads the [`DailySeries`](ratescope_core::DailySeries)
//! built at startup. Every call is a pure function of its inputs, so
//! responses can be cached or compared directly.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use ratescope_core::prelude::*;
//! use ratescope_chart::{ChartProjector, ChartRequest, SeriesSelection};
//!
//! let records = vec![RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 4.0)];
//! let series = SeriesBuilder::new(records)
//!     .end_date(Date::from_ymd(2023, 1, 10).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let projector = ChartProjector::new(Arc::new(series));
//! let response = projector
//!     .project(&ChartRequest::new(0, 9, SeriesSelection::Both, true))
//!     .unwrap();
//! assert_eq!(response.chart.series_names(), vec!["Bank Rate", "Random Walk"]);
//! assert_eq!(response.chart.template, "plotly_dark");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod marks;
mod projector;
mod request;
pub mod spec;
pub mod style;

pub use marks::{initial_marks, slider_marks};
pub use projector::{project, range_label, ChartProjector};
pub use request::{ChartRequest, SeriesSelection, Theme};
pub use spec::{ChartPoint, ChartResponse, ChartSpec, EndAnnotation, LineSeries};
pub use style::{Color, LineDash, LineStyle, SeriesKind};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::projector::{project, ChartProjector};
    pub use crate::request::{ChartRequest, SeriesSelection, Theme};
    pub use crate::spec::{ChartResponse, ChartSpec, LineSeries};
    pub use crate::style::SeriesKind;
}
