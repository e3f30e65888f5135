//! Next-match selection for the fixtures list.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Index (into `dates`) of the earliest entry at or after `now_ms`.
///
/// `dates` holds each card's kick-off in epoch milliseconds; `None` marks a
/// date the browser could not parse, which is never selected. Ties keep
/// document order.
#[must_use]
pub fn next_upcoming(dates: &[Option<f64>], now_ms: f64) -> Option<usize> {
    let mut order: Vec<(usize, f64)> = dates
        .iter()
        .enumerate()
        .filter_map(|(i, date)| date.map(|ms| (i, ms)))
        .collect();
    order.sort_by(|a, b| a.1.total_cmp(&b.1));
    order
        .into_iter()
        .find(|(_, ms)| *ms >= now_ms)
        .map(|(i, _)| i)
}

/// Convert a `Date.parse` result, which is `NaN` for bad input.
#[must_use]
pub fn parsed_date(ms: f64) -> Option<f64> {
    ms.is_finite().then_some(ms)
}
