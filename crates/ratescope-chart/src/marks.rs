//! Date-range slider marks.

use std::collections::BTreeMap;

use ratescope_core::error::check_range;
use ratescope_core::{DailySeries, ScopeResult};

/// Labels the two handle positions of the range slider.
///
/// Returns one entry when `start == end`.
///
/// # Errors
///
/// Returns `ScopeError::RangeError` for an inverted or out-of-bounds range.
pub fn slider_marks(
    series: &DailySeries,
    start: usize,
    end: usize,
) -> ScopeResult<BTreeMap<usize, String>> {
    check_range(start, end, series.len())?;
    let dates = series.dates();
    Ok([start, end]
        .into_iter()
        .map(|i| (i, dates[i].format_label()))
        .collect())
}

/// Labels only the two ends of the series.
#[must_use]
pub fn initial_marks(series: &DailySeries) -> BTreeMap<usize, String> {
    let last = series.len() - 1;
    let mut marks = BTreeMap::new();
    marks.insert(0, series.first_date().format_label());
    marks.insert(last, series.last_date().format_label());
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratescope_core::prelude::*;

    fn sample() -> DailySeries {
        let records = vec![RateRecord::new(Date::from_ymd(2023, 1, 1).unwrap(), 5.0)];
        build(&records, Date::from_ymd(2023, 1, 31).unwrap(), 0.05, 41).unwrap()
    }

    #[test]
    fn test_slider_marks() {
        let marks = slider_marks(&sample(), 4, 19).unwrap();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[&4], "05 Jan 2023");
        assert_eq!(marks[&19], "20 Jan 2023");
    }

    #[test]
    fn test_slider_marks_same_position() {
        let marks = slider_marks(&sample(), 7, 7).unwrap();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[&7], "08 Jan 2023");
    }

    #[test]
    fn test_slider_marks_rejects_bad_range() {
        assert!(slider_marks(&sample(), 8, 7).is_err());
        assert!(slider_marks(&sample(), 0, 31).is_err());
    }

    #[test]
    fn test_initial_marks() {
        let marks = initial_marks(&sample());
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[&0], "01 Jan 2023");
        assert_eq!(marks[&30], "31 Jan 2023");
    }
}
