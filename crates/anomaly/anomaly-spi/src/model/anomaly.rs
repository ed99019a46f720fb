//! Flagged month types.

use serde::{Deserialize, Serialize};
use series_spi::{Chronological, YearMonth};

/// How far outside the norm a flagged month lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnomalySeverity {
    /// Band an absolute z-score. Each band includes its lower edge.
    pub fn from_z_score(z: f64) -> Self {
        let z = z.abs();
        if z >= 4.0 {
            AnomalySeverity::Critical
        } else if z >= 3.0 {
            AnomalySeverity::High
        } else if z >= 2.5 {
            AnomalySeverity::Medium
        } else {
            AnomalySeverity::Low
        }
    }
}

/// Whether a flagged month is above or below the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyDirection {
    Spike,
    Drop,
}

impl AnomalyDirection {
    pub fn from_z_score(z: f64) -> Self {
        if z > 0.0 {
            AnomalyDirection::Spike
        } else {
            AnomalyDirection::Drop
        }
    }

    /// "above" or "below", for messages.
    pub fn preposition(&self) -> &'static str {
        match self {
            AnomalyDirection::Spike => "above",
            AnomalyDirection::Drop => "below",
        }
    }
}

/// A month whose value deviates from the series mean by at least the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub year: i32,
    pub month: u32,
    /// Label of the metric the month was flagged in, if the caller gave one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    pub observed_value: f64,
    /// Mean of the whole series.
    pub expected_value: f64,
    pub z_score: f64,
    pub severity: AnomalySeverity,
    pub direction: AnomalyDirection,
    /// Rounded `|observed - mean| / mean * 100`; `0` when the mean is zero.
    pub percent_change: f64,
    pub message: String,
}

impl Chronological for Anomaly {
    fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}
