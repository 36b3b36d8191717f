//! Daily series construction: calendar expansion, forward-fill, random walk.

use tracing::debug;

use super::policy::EndDatePolicy;
use super::random_walk::random_walk;
use super::DailySeries;
use crate::error::{ScopeError, ScopeResult};
use crate::types::{Date, RateRecord};

/// Default random walk step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.05;

/// Default random walk seed.
pub const DEFAULT_SEED: u64 = 41;

/// Builds a [`DailySeries`] from a sparse rate history.
///
/// The calendar runs from `records[0].date` to `end_date` inclusive. Each
/// day takes the rate of the latest record dated on or before it. Records
/// dated after `end_date` fall outside the calendar and are ignored.
///
/// # Errors
///
/// Returns `ScopeError::InputError` if `records` is empty, not strictly
/// ascending by date, contains a non-finite rate, if `end_date` precedes
/// the first record, or if `step_size` is negative or non-finite.
///
/// # Example
///
/// ```rust
/// use ratescope_core::prelude::*;
///
/// let records = vec![
///     RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 5.0),
///     RateRecord::new(Date::from_ymd(2023, 1, 5).unwrap(), 5.25),
/// ];
/// let series = build(&records, Date::from_ymd(2023, 1, 6).unwrap(), 0.05, 41).unwrap();
/// assert_eq!(series.rate(), &[5.0, 5.0, 5.0, 5.0, 5.25, 5.25]);
/// ```
pub fn build(
    records: &[RateRecord],
    end_date: Date,
    step_size: f64,
    seed: u64,
) -> ScopeResult<DailySeries> {
    validate_records(records)?;
    validate_step_size(step_size)?;

    let start = records[0].date;
    if end_date < start {
        return Err(ScopeError::input(format!(
            "end date {end_date} precedes first record date {start}"
        )));
    }

    let (dates, rate) = forward_fill(records, start, end_date);
    let walk = random_walk(rate[0], dates.len(), step_size, seed);

    let beyond_end = records.iter().filter(|r| r.date > end_date).count();
    if beyond_end > 0 {
        debug!(beyond_end, %end_date, "ignoring records dated after the end date");
    }
    debug!(
        records = records.len(),
        days = dates.len(),
        %start,
        %end_date,
        step_size,
        seed,
        "built daily series"
    );

    Ok(DailySeries::from_parts(dates, rate, walk, step_size, seed))
}

/// Expands the calendar and forward-fills in a single pass.
fn forward_fill(records: &[RateRecord], start: Date, end: Date) -> (Vec<Date>, Vec<f64>) {
    let capacity = usize::try_from(start.days_between(&end) + 1).unwrap_or_default();
    let mut dates = Vec::with_capacity(capacity);
    let mut rate = Vec::with_capacity(capacity);
    let mut cursor = 0;

    for day in start.iter_days_to(end) {
        while cursor + 1 < records.len() && records[cursor + 1].date <= day {
            cursor += 1;
        }
        dates.push(day);
        rate.push(records[cursor].rate);
    }

    (dates, rate)
}

fn validate_records(records: &[RateRecord]) -> ScopeResult<()> {
    if records.is_empty() {
        return Err(ScopeError::input("rate history is empty"));
    }

    for (i, record) in records.iter().enumerate() {
        if !record.rate.is_finite() {
            return Err(ScopeError::input(format!(
                "record {i} ({}) has non-finite rate {}",
                record.date, record.rate
            )));
        }
    }

    for (i, pair) in records.windows(2).enumerate() {
        let (prev, next) = (pair[0].date, pair[1].date);
        if next == prev {
            return Err(ScopeError::input(format!(
                "duplicate date {next} at records {i} and {}",
                i + 1
            )));
        }
        if next < prev {
            return Err(ScopeError::input(format!(
                "records out of order: {next} at record {} follows {prev}",
                i + 1
            )));
        }
    }

    Ok(())
}

fn validate_step_size(step_size: f64) -> ScopeResult<()> {
    if !step_size.is_finite() || step_size < 0.0 {
        return Err(ScopeError::input(format!(
            "step size must be finite and non-negative, got {step_size}"
        )));
    }
    Ok(())
}

/// Fluent construction of a [`DailySeries`] with configurable defaults.
///
/// ```rust
/// use ratescope_core::prelude::*;
///
/// let records = vec![RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 4.0)];
/// let series = SeriesBuilder::new(records)
///     .end_date(Date::from_ymd(2023, 1, 31).unwrap())
///     .step_size(0.1)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(series.len(), 31);
/// ```
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    records: Vec<RateRecord>,
    end_date: EndDatePolicy,
    today: Option<Date>,
    step_size: f64,
    seed: u64,
}

impl SeriesBuilder {
    /// Starts a builder over the given rate history.
    #[must_use]
    pub fn new(records: impl Into<Vec<RateRecord>>) -> Self {
        Self {
            records: records.into(),
            end_date: EndDatePolicy::default(),
            today: None,
            step_size: DEFAULT_STEP_SIZE,
            seed: DEFAULT_SEED,
        }
    }

    /// Stops the calendar at a fixed date.
    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = EndDatePolicy::Fixed(date);
        self
    }

    /// Sets the end-of-calendar policy.
    #[must_use]
    pub fn end_date_policy(mut self, policy: EndDatePolicy) -> Self {
        self.end_date = policy;
        self
    }

    /// Overrides the date used for [`EndDatePolicy::Today`].
    #[must_use]
    pub fn today(mut self, date: Date) -> Self {
        self.today = Some(date);
        self
    }

    /// Sets the random walk step size.
    #[must_use]
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Sets the random walk seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the series, consuming the builder and its records.
    ///
    /// # Errors
    ///
    /// See [`build`].
    pub fn build(self) -> ScopeResult<DailySeries> {
        let today = self.today.unwrap_or_else(Date::today);
        let end_date = self.end_date.resolve(&self.records, today)?;
        build(&self.records, end_date, self.step_size, self.seed)
    }
}
