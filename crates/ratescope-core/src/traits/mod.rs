//! Core traits for the Ratescope library.
//!
//! - [`RateHistorySource`]: Supplier of the sparse rate-change history

use crate::error::ScopeResult;
use crate::types::RateRecord;

/// Default header of the column holding change dates.
pub const DEFAULT_DATE_COLUMN: &str = "Date Changed";
/// Default header of the column holding the rate in percent.
pub const DEFAULT_RATE_COLUMN: &str = "Rate";
/// Default date format, as in `07 Aug 25`.
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %y";

/// A supplier of rate-change records.
///
/// Sources are read once at startup. Implementations must return records
/// ascending by date; the series builder rejects anything else.
pub trait RateHistorySource: Send + Sync {
    /// Loads the full history.
    fn load(&self) -> ScopeResult<Vec<RateRecord>>;

    /// Human-readable description of where the records come from.
    fn describe(&self) -> String;
}

/// Rate history held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateHistory {
    records: Vec<RateRecord>,
}

impl InMemoryRateHistory {
    /// Wraps an already-ordered list of records.
    #[must_use]
    pub fn new(records: Vec<RateRecord>) -> Self {
        Self { records }
    }
}

impl RateHistorySource for InMemoryRateHistory {
    fn load(&self) -> ScopeResult<Vec<RateRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}
