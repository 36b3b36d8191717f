//! Domain types.
//!
//! - [`Date`]: Calendar day used as the series index
//! - [`RateRecord`]: A dated rate change from the source history

mod date;
mod rate_record;

pub use date::{Date, LABEL_FORMAT};
pub use rate_record::RateRecord;
