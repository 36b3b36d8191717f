//! End-of-calendar policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScopeError, ScopeResult};
use crate::types::{Date, RateRecord};

/// Where the dense daily calendar stops.
///
/// `LastRecord` keeps builds reproducible: the same history always yields
/// the same series. `Today` extends the last known rate up to the current
/// day, which changes from one day to the next.
///
/// Parsed from and written as `"last-record"`, `"today"`, or an ISO date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EndDatePolicy {
    /// Stop at the last record's date.
    #[default]
    LastRecord,
    /// Stop at the supplied "today".
    Today,
    /// Stop at a fixed date.
    Fixed(Date),
}

impl EndDatePolicy {
    /// Resolves the policy to a concrete end date.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InputError` if `records` is empty.
    pub fn resolve(&self, records: &[RateRecord], today: Date) -> ScopeResult<Date> {
        match self {
            Self::LastRecord => records
                .last()
                .map(|r| r.date)
                .ok_or_else(|| ScopeError::input("rate history is empty")),
            Self::Today => Ok(today),
            Self::Fixed(date) => Ok(*date),
        }
    }
}

impl fmt::Display for EndDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastRecord => write!(f, "last-record"),
            Self::Today => write!(f, "today"),
            Self::Fixed(date) => write!(f, "{date}"),
        }
    }
}

impl FromStr for EndDatePolicy {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last-record" | "last_record" | "last" => Ok(Self::LastRecord),
            "today" => Ok(Self::Today),
            other => Date::parse(other).map(Self::Fixed),
        }
    }
}

impl TryFrom<String> for EndDatePolicy {
    type Error = ScopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EndDatePolicy> for String {
    fn from(policy: EndDatePolicy) -> Self {
        policy.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RateRecord> {
        vec![
            RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 5.0),
            RateRecord::new(Date::from_ymd(2023, 1, 5).unwrap(), 5.25),
        ]
    }

    #[test]
    fn test_resolve() {
        let today = Date::from_ymd(2024, 6, 1).unwrap();
        let fixed = Date::from_ymd(2023, 1, 6).unwrap();

        assert_eq!(
            EndDatePolicy::LastRecord.resolve(&records(), today).unwrap(),
            Date::from_ymd(2023, 1, 5).unwrap()
        );
        assert_eq!(EndDatePolicy::Today.resolve(&records(), today).unwrap(), today);
        assert_eq!(
            EndDatePolicy::Fixed(fixed).resolve(&records(), today).unwrap(),
            fixed
        );
        assert!(EndDatePolicy::LastRecord.resolve(&[], today).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("last-record".parse::<EndDatePolicy>().unwrap(), EndDatePolicy::LastRecord);
        assert_eq!("Today".parse::<EndDatePolicy>().unwrap(), EndDatePolicy::Today);

        let fixed: EndDatePolicy = "2023-01-06".parse().unwrap();
        assert_eq!(fixed.to_string(), "2023-01-06");
        assert!("tomorrow".parse::<EndDatePolicy>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&EndDatePolicy::Today).unwrap();
        assert_eq!(json, "\"today\"");
        let policy: EndDatePolicy = serde_json::from_str("\"2023-02-01\"").unwrap();
        assert_eq!(policy, EndDatePolicy::Fixed(Date::from_ymd(2023, 2, 1).unwrap()));
    }
}
