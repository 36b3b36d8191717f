//! Property-based tests for daily series invariants.
//!
//! These tests verify the properties every build must satisfy:
//! - The calendar is contiguous and spans first record to end date
//! - Forward-fill assigns each day the latest record on or before it
//! - The random walk starts at the first rate and moves by exactly one step
//! - Builds are deterministic

use proptest::prelude::*;
use ratescope_core::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// Ascending rate history: a start offset, then (gap in days, rate) pairs.
fn history() -> impl Strategy<Value = Vec<RateRecord>> {
    (0i64..3650, prop::collection::vec((1i64..40, 0u32..64), 1..20)).prop_map(|(offset, steps)| {
        let base = Date::from_ymd(2000, 1, 1).unwrap().add_days(offset);
        let mut date = base;
        steps
            .into_iter()
            .enumerate()
            .map(|(i, (gap, quarter_points))| {
                if i > 0 {
                    date = date.add_days(gap);
                }
                RateRecord::new(date, f64::from(quarter_points) * 0.25)
            })
            .collect()
    })
}

/// Rate expected on `day` by direct lookup.
fn expected_rate(records: &[RateRecord], day: Date) -> f64 {
    records
        .iter()
        .rev()
        .find(|r| r.date <= day)
        .map(|r| r.rate)
        .unwrap()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn calendar_is_contiguous(records in history(), extra in 0i64..60) {
        let end = records.last().unwrap().date.add_days(extra);
        let series = build(&records, end, 0.05, 41).unwrap();

        let expected_len = records[0].date.days_between(&end) + 1;
        prop_assert_eq!(series.len() as i64, expected_len);
        prop_assert_eq!(series.rate().len(), series.len());
        prop_assert_eq!(series.random_walk().len(), series.len());
        prop_assert_eq!(series.first_date(), records[0].date);
        prop_assert_eq!(series.last_date(), end);
        for pair in series.dates().windows(2) {
            prop_assert_eq!(pair[0].days_between(&pair[1]), 1);
        }
    }

    #[test]
    fn forward_fill_matches_lookup(records in history(), extra in 0i64..60) {
        let end = records.last().unwrap().date.add_days(extra);
        let series = build(&records, end, 0.05, 41).unwrap();

        for (date, rate) in series.dates().iter().zip(series.rate()) {
            prop_assert_eq!(*rate, expected_rate(&records, *date));
        }
    }

    #[test]
    fn random_walk_steps(records in history(), step in 0.01f64..1.0, seed in any::<u64>()) {
        let end = records.last().unwrap().date;
        let series = build(&records, end, step, seed).unwrap();
        let walk = series.random_walk();

        prop_assert_eq!(walk[0], series.rate()[0]);
        for pair in walk.windows(2) {
            let moved = (pair[1] - pair[0]).abs();
            prop_assert!((moved - step).abs() < 1e-9, "moved {} with step {}", moved, step);
        }
    }

    #[test]
    fn builds_are_deterministic(records in history(), seed in any::<u64>()) {
        let end = records.last().unwrap().date.add_days(10);
        let a = build(&records, end, 0.05, seed).unwrap();
        let b = build(&records, end, 0.05, seed).unwrap();

        let bits_a: Vec<u64> = a.random_walk().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.random_walk().iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(bits_a, bits_b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reversed_history_is_rejected(records in history()) {
        prop_assume!(records.len() > 1);
        let reversed: Vec<RateRecord> = records.iter().rev().copied().collect();
        let end = records.last().unwrap().date;
        let err = build(&reversed, end, 0.05, 41).unwrap_err();
        let is_input = matches!(err, ScopeError::InputError { .. });
        prop_assert!(is_input, "expected InputError, got {:?}", err);
    }
}
