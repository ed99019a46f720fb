//! Chronological ordering
//!
//! Statistics are always computed over ascending (year, month) order, so the
//! result never depends on the order the caller supplied.

use series_spi::Chronological;

/// Return a copy of `items` sorted ascending by calendar month.
///
/// The sort is stable: duplicate months keep their input order.
pub fn chronological<T: Chronological + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.period());
    sorted
}

/// The trailing `n` items of an already ordered slice (all of them if shorter).
pub fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use series_spi::{TimePoint, YearMonth};

    #[test]
    fn test_chronological_sorts_across_years() {
        let points = vec![
            TimePoint::new(2025, 1, 3.0),
            TimePoint::new(2024, 12, 2.0),
            TimePoint::new(2024, 2, 1.0),
        ];
        let sorted = chronological(&points);
        let periods: Vec<YearMonth> = sorted.iter().map(|p| p.period()).collect();
        assert_eq!(
            periods,
            vec![
                YearMonth { year: 2024, month: 2 },
                YearMonth { year: 2024, month: 12 },
                YearMonth { year: 2025, month: 1 },
            ]
        );
    }

    #[test]
    fn test_chronological_is_stable_for_duplicates() {
        let points = vec![
            TimePoint::new(2025, 2, 1.0),
            TimePoint::new(2025, 1, 9.0),
            TimePoint::new(2025, 2, 2.0),
        ];
        let sorted = chronological(&points);
        assert_eq!(sorted[1].value, 1.0);
        assert_eq!(sorted[2].value, 2.0);
    }

    #[test]
    fn test_chronological_empty() {
        let points: Vec<TimePoint> = Vec::new();
        assert!(chronological(&points).is_empty());
    }

    #[test]
    fn test_last_n() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(last_n(&data, 3), &[3, 4, 5]);
        assert_eq!(last_n(&data, 10), &[1, 2, 3, 4, 5]);
        assert!(last_n(&data, 0).is_empty());
    }
}
