//! Anomaly detection result types.

use serde::{Deserialize, Serialize};

use crate::model::Anomaly;

/// Anomaly detection result for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResult {
    /// Flagged months, chronological.
    pub anomalies: Vec<Anomaly>,
    /// Mean of the series; `0` when it was too short to analyse.
    pub mean: f64,
    /// Sample standard deviation; `0` when too short or constant.
    pub std_dev: f64,
    /// Threshold used for detection.
    pub threshold: f64,
}

impl AnomalyResult {
    /// Result for a series too short to analyse.
    pub fn empty(threshold: f64) -> Self {
        Self {
            anomalies: Vec::new(),
            mean: 0.0,
            std_dev: 0.0,
            threshold,
        }
    }

    /// Count of detected anomalies.
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }

    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

/// Detection results for the three membership event metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiMetricResult {
    pub new_members: AnomalyResult,
    pub resigned_members: AnomalyResult,
    pub expelled_members: AnomalyResult,
    /// Every anomaly above, newest month first.
    pub all_anomalies: Vec<Anomaly>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = AnomalyResult::empty(2.0);
        assert_eq!(result.anomaly_count(), 0);
        assert!(!result.has_anomalies());
        assert_eq!(result.mean, 0.0);
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.threshold, 2.0);
    }
}
