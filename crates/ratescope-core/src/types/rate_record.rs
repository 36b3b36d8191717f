//! Rate change records.

use serde::{Deserialize, Serialize};

use super::Date;

/// A single rate change: the rate that became effective on `date`.
///
/// A rate history is an ordered list of these, ascending by date with
/// unique dates. The record stays in force until the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Effective date of the change.
    pub date: Date,
    /// Rate in percent (e.g. `5.25`).
    pub rate: f64,
}

impl RateRecord {
    /// Creates a new rate record.
    #[must_use]
    pub fn new(date: Date, rate: f64) -> Self {
        Self { date, rate }
    }
}
