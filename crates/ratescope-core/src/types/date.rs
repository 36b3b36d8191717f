//! Calendar date type.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{ScopeError, ScopeResult};

/// Label format used for range labels and slider marks (`02 Jan 2023`).
pub const LABEL_FORMAT: &str = "%d %b %Y";

/// A calendar day.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. The daily series
/// is indexed by contiguous `Date`s, so the type only exposes the
/// operations the calendar needs.
///
/// # Example
///
/// ```rust
/// use ratescope_core::types::Date;
///
/// let date = Date::from_ymd(2023, 1, 2).unwrap();
/// assert_eq!(date.format_label(), "02 Jan 2023");
/// assert_eq!(date.add_days(30).to_string(), "2023-02-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ScopeResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| ScopeError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> ScopeResult<Self> {
        Self::parse_with_format(s, "%Y-%m-%d")
    }

    /// Creates a date from a string in an arbitrary `chrono` format,
    /// e.g. `"%d %b %y"` for `"07 Aug 25"`.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidDate` if the string does not match the format.
    pub fn parse_with_format(s: &str, format: &str) -> ScopeResult<Self> {
        NaiveDate::parse_from_str(s.trim(), format)
            .map(Date)
            .map_err(|_| ScopeError::invalid_date(format!("Cannot parse '{s}' as '{format}'")))
    }

    /// Returns today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Iterates every calendar day from `self` to `end`, both inclusive.
    ///
    /// Yields nothing when `end` precedes `self`.
    pub fn iter_days_to(self, end: Date) -> impl Iterator<Item = Date> {
        self.0.iter_days().take_while(move |d| *d <= end.0).map(Date)
    }

    /// Formats the date for display labels (`%d %b %Y`).
    #[must_use]
    pub fn format_label(&self) -> String {
        self.0.format(LABEL_FORMAT).to_string()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
