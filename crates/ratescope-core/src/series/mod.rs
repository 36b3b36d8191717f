//! Dense daily series.
//!
//! A [`DailySeries`] is built once from a sparse rate history by
//! [`SeriesBuilder`] (or the [`build`] shorthand) and never mutated after.
//! Index `i` is the join key across `dates`, `rate`, and `random_walk`;
//! every consumer addresses the series by inclusive index ranges.

mod builder;
mod policy;
mod random_walk;

pub use builder::{build, SeriesBuilder, DEFAULT_SEED, DEFAULT_STEP_SIZE};
pub use policy::EndDatePolicy;
pub use random_walk::random_walk;

use serde::Serialize;

use crate::error::{check_range, ScopeResult};
use crate::types::Date;

/// Forward-filled daily rate series with an aligned synthetic random walk.
///
/// Invariants:
/// - `dates` is non-empty and contiguous (consecutive entries differ by one day)
/// - `dates.len() == rate.len() == random_walk.len()`
/// - `random_walk[0] == rate[0]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    dates: Vec<Date>,
    rate: Vec<f64>,
    random_walk: Vec<f64>,
    step_size: f64,
    seed: u64,
}

/// One row of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Calendar day.
    pub date: Date,
    /// Forward-filled rate on that day.
    pub rate: f64,
    /// Random walk value on that day.
    pub random_walk: f64,
}

/// Descriptive statistics of a built series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// First calendar day.
    pub first_date: Date,
    /// Last calendar day.
    pub last_date: Date,
    /// Number of days in the calendar.
    pub days: usize,
    /// Rate on the last day.
    pub latest_rate: f64,
    /// Lowest rate over the calendar.
    pub min_rate: f64,
    /// Highest rate over the calendar.
    pub max_rate: f64,
    /// Days on which the rate differs from the previous day.
    pub rate_changes: usize,
    /// Random walk value on the last day.
    pub final_random_walk: f64,
    /// Random walk step size.
    pub step_size: f64,
    /// Random walk seed.
    pub seed: u64,
}

impl DailySeries {
    /// Assembles a series from already-validated columns.
    pub(crate) fn from_parts(
        dates: Vec<Date>,
        rate: Vec<f64>,
        random_walk: Vec<f64>,
        step_size: f64,
        seed: u64,
    ) -> Self {
        debug_assert!(!dates.is_empty());
        debug_assert_eq!(dates.len(), rate.len());
        debug_assert_eq!(dates.len(), random_walk.len());
        Self {
            dates,
            rate,
            random_walk,
            step_size,
            seed,
        }
    }

    /// Calendar days, ascending and contiguous.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Forward-filled rate per day.
    #[must_use]
    pub fn rate(&self) -> &[f64] {
        &self.rate
    }

    /// Synthetic random walk per day.
    #[must_use]
    pub fn random_walk(&self) -> &[f64] {
        &self.random_walk
    }

    /// Number of days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false for a built series; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First calendar day.
    #[must_use]
    pub fn first_date(&self) -> Date {
        self.dates[0]
    }

    /// Last calendar day.
    #[must_use]
    pub fn last_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Random walk step size used for the build.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Random walk seed used for the build.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Index of `date` in the calendar, if covered.
    #[must_use]
    pub fn index_of(&self, date: Date) -> Option<usize> {
        let offset = self.first_date().days_between(&date);
        usize::try_from(offset).ok().filter(|i| *i < self.len())
    }

    /// Forward-filled rate on `date`, if covered.
    #[must_use]
    pub fn rate_on(&self, date: Date) -> Option<f64> {
        self.index_of(date).map(|i| self.rate[i])
    }

    /// Row at index `i`.
    #[must_use]
    pub fn point(&self, i: usize) -> Option<SeriesPoint> {
        (i < self.len()).then(|| SeriesPoint {
            date: self.dates[i],
            rate: self.rate[i],
            random_walk: self.random_walk[i],
        })
    }

    /// Rows `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::RangeError` if the range is inverted or out of bounds.
    pub fn points(
        &self,
        start: usize,
        end: usize,
    ) -> ScopeResult<impl Iterator<Item = SeriesPoint> + '_> {
        check_range(start, end, self.len())?;
        Ok((start..=end).map(move |i| SeriesPoint {
            date: self.dates[i],
            rate: self.rate[i],
            random_walk: self.random_walk[i],
        }))
    }

    /// Computes descriptive statistics.
    #[must_use]
    pub fn summary(&self) -> SeriesSummary {
        let last = self.len() - 1;
        let min_rate = self.rate.iter().copied().fold(f64::INFINITY, f64::min);
        let max_rate = self.rate.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let rate_changes = self.rate.windows(2).filter(|w| w[0] != w[1]).count();

        SeriesSummary {
            first_date: self.first_date(),
            last_date: self.last_date(),
            days: self.len(),
            latest_rate: self.rate[last],
            min_rate,
            max_rate,
            rate_changes,
            final_random_walk: self.random_walk[last],
            step_size: self.step_size,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RateRecord;

    fn sample() -> DailySeries {
        let records = vec![
            RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 5.0),
            RateRecord::new(Date::from_ymd(2023, 1, 5).unwrap(), 5.25),
        ];
        build(&records, Date::from_ymd(2023, 1, 6).unwrap(), 0.05, 41).unwrap()
    }

    #[test]
    fn test_index_of_and_rate_on() {
        let series = sample();
        let d = |day| Date::from_ymd(2023, 1, day).unwrap();

        assert_eq!(series.index_of(d(1)), Some(0));
        assert_eq!(series.index_of(d(6)), Some(5));
        assert_eq!(series.index_of(d(7)), None);
        assert_eq!(series.index_of(Date::from_ymd(2022, 12, 31).unwrap()), None);

        assert_eq!(series.rate_on(d(4)), Some(5.0));
        assert_eq!(series.rate_on(d(5)), Some(5.25));
        assert_eq!(series.rate_on(d(9)), None);
    }

    #[test]
    fn test_points() {
        let series = sample();
        let rows: Vec<SeriesPoint> = series.points(3, 4).unwrap().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rate, 5.0);
        assert_eq!(rows[1].rate, 5.25);
        assert_eq!(rows[1].date, Date::from_ymd(2023, 1, 5).unwrap());

        assert!(series.points(4, 3).is_err());
        assert!(series.points(0, 6).is_err());
        assert!(series.point(6).is_none());
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.days, 6);
        assert_eq!(summary.first_date.to_string(), "2023-01-01");
        assert_eq!(summary.last_date.to_string(), "2023-01-06");
        assert_eq!(summary.latest_rate, 5.25);
        assert_eq!(summary.min_rate, 5.0);
        assert_eq!(summary.max_rate, 5.25);
        assert_eq!(summary.rate_changes, 1);
        assert_eq!(summary.seed, 41);
    }
}
