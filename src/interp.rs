//! Daily resampling, shifting and linear extension of dated series.

use chrono::{Duration, NaiveDate};

/// Resample a date-ordered series to one value per calendar day.
///
/// Days between two known points are filled by linear interpolation; known
/// values are carried over unchanged. The output spans the first to the
/// last known date inclusive, so its length is the span in days plus one.
/// Nothing is extrapolated beyond either end.
pub fn resample_daily(points: &[(NaiveDate, f64)]) -> Vec<(NaiveDate, f64)> {
    let mut daily = Vec::new();
    for pair in points.windows(2) {
        let (start, from) = pair[0];
        let (end, to) = pair[1];
        let span = (end - start).num_days();
        daily.push((start, from));
        for day in 1..span {
            let fraction = day as f64 / span as f64;
            daily.push((start + Duration::days(day), from + (to - from) * fraction));
        }
    }
    if let Some(&last) = points.last() {
        daily.push(last);
    }
    daily
}

/// Shift every date in a series by a fixed signed day count.
pub fn shift_by_days(points: &[(NaiveDate, f64)], offset_days: i64) -> Vec<(NaiveDate, f64)> {
    points
        .iter()
        .map(|&(date, value)| (date + Duration::days(offset_days), value))
        .collect()
}

/// A synthetic point extending a series past its last known date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extension {
    /// Whole days past the last known date.
    pub days_past_last: i64,
    /// Value attained at that day on the extended line.
    pub value: f64,
}

/// Project the line through a series' last two points far enough to reach
/// `target`.
///
/// The day count is rounded up so the target is enclosed, and the value is
/// recomputed at the rounded day rather than taken from the target, since
/// rounding changes the value actually reached.
pub fn extend_to_reach(
    next_to_last: (NaiveDate, f64),
    last: (NaiveDate, f64),
    target: f64,
) -> Extension {
    let (next_to_last_date, next_to_last_value) = next_to_last;
    let (last_date, last_value) = last;
    let days_delta = (last_date - next_to_last_date).num_days();

    // days to add past the next-to-last date to hit target on the line,
    // then re-anchored on the last date
    let exact = (next_to_last_value - target) * days_delta as f64
        / (next_to_last_value - last_value)
        - days_delta as f64;
    let days_past_last = exact.ceil() as i64;

    let value =
        last_value - (next_to_last_value - last_value) * days_past_last as f64 / days_delta as f64;
    Extension {
        days_past_last,
        value,
    }
}
