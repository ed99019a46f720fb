//! Multi-metric detection over monthly membership event counts.

use anomaly_spi::{Anomaly, AnomalyDetector, MultiMetricResult};
use series_core::{Chronological, MonthlyEventCounts, TimePoint};

use crate::detectors::ZScoreDetector;

/// The membership event metrics carried by [`MonthlyEventCounts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    NewMembers,
    ResignedMembers,
    ExpelledMembers,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::NewMembers,
        MetricKind::ResignedMembers,
        MetricKind::ExpelledMembers,
    ];

    /// Human-readable label used in anomaly messages.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::NewMembers => "New members",
            MetricKind::ResignedMembers => "Resignations",
            MetricKind::ExpelledMembers => "Expulsions",
        }
    }

    /// Project one metric out of a month's counts.
    pub fn point(&self, row: &MonthlyEventCounts) -> TimePoint {
        match self {
            MetricKind::NewMembers => row.new_members_point(),
            MetricKind::ResignedMembers => row.resigned_members_point(),
            MetricKind::ExpelledMembers => row.expelled_members_point(),
        }
    }

    /// The single-metric series for this metric.
    pub fn series(&self, rows: &[MonthlyEventCounts]) -> Vec<TimePoint> {
        rows.iter().map(|row| self.point(row)).collect()
    }
}

impl ZScoreDetector {
    /// Detect each metric independently and merge the findings newest first.
    ///
    /// Each metric is normalised against its own mean and standard deviation
    /// only. Within one metric anomalies stay chronological; the merged list
    /// is sorted descending by month, keeping merge order for equal months.
    pub fn detect_multi_metric(&self, rows: &[MonthlyEventCounts]) -> MultiMetricResult {
        let [new_members, resigned_members, expelled_members] = MetricKind::ALL
            .map(|metric| self.detect(&metric.series(rows), Some(metric.label())));

        let mut all_anomalies: Vec<Anomaly> = new_members
            .anomalies
            .iter()
            .chain(&resigned_members.anomalies)
            .chain(&expelled_members.anomalies)
            .cloned()
            .collect();
        all_anomalies.sort_by(|a, b| b.period().cmp(&a.period()));

        tracing::debug!(
            months = rows.len(),
            flagged = all_anomalies.len(),
            "multi-metric scan complete"
        );

        MultiMetricResult {
            new_members,
            resigned_members,
            expelled_members,
            all_anomalies,
        }
    }
}

/// Run [`ZScoreDetector::detect_multi_metric`] with `threshold`.
pub fn detect_multi_metric(rows: &[MonthlyEventCounts], threshold: f64) -> MultiMetricResult {
    ZScoreDetector::new(threshold).detect_multi_metric(rows)
}
