//! # Ratescope Ext File
//!
//! File-based rate history for the Ratescope dashboard.
//!
//! - [`CsvRateHistorySource`]: a rate-change CSV such as the Bank of England
//!   Bank Rate export (`Date Changed,Rate` with dates like `07 Aug 25`)

#![warn(missing_docs)]
#![warn(clippy::all)]

mod csv_source;
mod error;

pub use csv_source::CsvRateHistorySource;
pub use error::SourceError;
