//! Anomaly detector and early-warning rule trait definitions.

use series_spi::{MonthlyEventCounts, TimePoint};

use crate::model::{AnomalyResult, EarlyWarning};

/// Anomaly detector trait.
///
/// Implementations flag months of a single-metric series that deviate from
/// the series as a whole. Detection never fails: short or constant series
/// yield an empty result.
pub trait AnomalyDetector: Send + Sync {
    /// Detect anomalies in `series`, tagging them with `label` when given.
    fn detect(&self, series: &[TimePoint], label: Option<&str>) -> AnomalyResult;

    /// Absolute z-score at or above which a month is flagged.
    fn threshold(&self) -> f64;
}

/// A heuristic evaluated over the three most recent months.
pub trait EarlyWarningRule: Send + Sync {
    /// Inspect a chronological three-month window.
    fn evaluate(&self, window: &[MonthlyEventCounts; 3]) -> Option<EarlyWarning>;
}
