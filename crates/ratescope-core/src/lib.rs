//! # Ratescope Core
//!
//! Daily series preparation for the Ratescope bank-rate dashboard.
//!
//! - **Types**: [`Date`] and [`RateRecord`]
//! - **Series**: [`DailySeries`], built once from a sparse rate history by
//!   expanding it to a contiguous daily calendar, forward-filling each day,
//!   and appending a seeded random walk aligned to the same calendar
//! - **Traits**: [`RateHistorySource`] for whatever supplies the history
//!
//! ## Example
//!
//! ```rust
//! use ratescope_core::prelude::*;
//!
//! let records = vec![
//!     RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 5.0),
//!     RateRecord::new(Date::from_ymd(2023, 1, 5).unwrap(), 5.25),
//! ];
//! let series = SeriesBuilder::new(records).build().unwrap();
//! assert_eq!(series.len(), 5);
//! assert_eq!(series.random_walk()[0], series.rate()[0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]

pub mod error;
pub mod series;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ScopeError, ScopeResult};
    pub use crate::series::{
        build, random_walk, DailySeries, EndDatePolicy, SeriesBuilder, SeriesPoint,
        SeriesSummary,
    };
    pub use crate::traits::{InMemoryRateHistory, RateHistorySource};
    pub use crate::types::{Date, RateRecord};
}

// Re-export commonly used types at crate root
pub use error::{ScopeError, ScopeResult};
pub use series::{DailySeries, SeriesBuilder};
pub use traits::{
    RateHistorySource, DEFAULT_DATE_COLUMN, DEFAULT_DATE_FORMAT, DEFAULT_RATE_COLUMN,
};
pub use types::{Date, RateRecord};
