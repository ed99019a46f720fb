//! Growth figures over a total-member series.

use series_core::{chronological, stats, TimePoint};

/// Percent change from the first to the last month.
///
/// `0.0` with fewer than two points or a zero starting value.
pub fn growth_rate(series: &[TimePoint]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    let sorted = chronological(series);
    let first = sorted[0].value;
    let last = sorted[sorted.len() - 1].value;
    if first == 0.0 {
        return 0.0;
    }
    (last - first) / first * 100.0
}

/// Rounded mean of month-over-month differences; `0` with fewer than two points.
pub fn average_monthly_growth(series: &[TimePoint]) -> i64 {
    if series.len() < 2 {
        return 0;
    }
    let sorted = chronological(series);
    let diffs: Vec<f64> = sorted.windows(2).map(|w| w[1].value - w[0].value).collect();
    stats::mean(&diffs).round() as i64
}
