//! Anomaly detector implementations.

use anomaly_api::{ZScoreConfig, DEFAULT_THRESHOLD};
use anomaly_spi::{Anomaly, AnomalyDetector, AnomalyDirection, AnomalyResult, AnomalySeverity};
use series_core::{chronological, stats, values, Chronological, TimePoint};

/// Fewer points than this give no meaningful dispersion.
pub const MIN_POINTS: usize = 3;

// ============================================================================
// Z-Score Detector
// ============================================================================

/// Z-Score based anomaly detector.
///
/// Flags every month whose value lies at least `threshold` sample standard
/// deviations from the mean of the whole series. The expected value reported
/// for a flagged month is that global mean, not a rolling one.
#[derive(Debug, Clone)]
pub struct ZScoreDetector {
    threshold: f64,
}

impl ZScoreDetector {
    /// Create a new Z-Score detector with given threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Create from configuration.
    pub fn from_config(config: &ZScoreConfig) -> Self {
        Self::new(config.threshold)
    }

    fn flag(&self, point: &TimePoint, mean: f64, std_dev: f64, label: Option<&str>) -> Option<Anomaly> {
        let z = stats::z_score(point.value, mean, std_dev);
        if z.abs() < self.threshold {
            return None;
        }

        let direction = AnomalyDirection::from_z_score(z);
        let percent_change = if mean == 0.0 {
            0.0
        } else {
            ((point.value - mean).abs() / mean * 100.0).round()
        };
        let message = format!(
            "{} in {}: {:.0}% {} average",
            label.unwrap_or("Value"),
            point.period(),
            percent_change,
            direction.preposition()
        );

        tracing::trace!(period = %point.period(), z, "month flagged");

        Some(Anomaly {
            year: point.year,
            month: point.month,
            metric: label.map(str::to_string),
            observed_value: point.value,
            expected_value: mean,
            z_score: z,
            severity: AnomalySeverity::from_z_score(z),
            direction,
            percent_change,
            message,
        })
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl AnomalyDetector for ZScoreDetector {
    fn detect(&self, series: &[TimePoint], label: Option<&str>) -> AnomalyResult {
        if series.len() < MIN_POINTS {
            return AnomalyResult::empty(self.threshold);
        }

        let sorted = chronological(series);
        let ys = values(&sorted);
        let mean = stats::mean(&ys);
        let std_dev = stats::std_dev(&ys);

        let anomalies: Vec<Anomaly> = sorted
            .iter()
            .filter_map(|point| self.flag(point, mean, std_dev, label))
            .collect();

        tracing::debug!(
            metric = label.unwrap_or("value"),
            points = ys.len(),
            mean,
            std_dev,
            flagged = anomalies.len(),
            "z-score scan complete"
        );

        AnomalyResult {
            anomalies,
            mean,
            std_dev,
            threshold: self.threshold,
        }
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Run a [`ZScoreDetector`] with `threshold` over `series`.
pub fn detect(series: &[TimePoint], threshold: f64, label: Option<&str>) -> AnomalyResult {
    ZScoreDetector::new(threshold).detect(series, label)
}
