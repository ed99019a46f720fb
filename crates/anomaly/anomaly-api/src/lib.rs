//! Anomaly Detection API
//!
//! Configuration types for anomaly detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    Anomaly, AnomalyDirection, AnomalyError, AnomalyResult, AnomalySeverity, EarlyWarning,
    MultiMetricResult, Result, WarningKind, WarningSeverity,
};

/// Default absolute z-score at which a month is flagged.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

// ============================================================================
// Detector Configuration
// ============================================================================

/// Z-Score detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZScoreConfig {
    /// Z-score threshold for anomaly detection (default: 2.0).
    pub threshold: f64,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Reject negative or non-finite thresholds.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be finite".to_string(),
            });
        }
        if self.threshold < 0.0 {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}
