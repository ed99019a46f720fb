//! Trend Forecasting API
//!
//! Configuration types for trend forecasting.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use trend_spi::{Prediction, RegressionModel, Result, TrendError, TrendForecast, TrendSummary};

/// Default number of months projected past the last observation.
pub const DEFAULT_HORIZON_MONTHS: usize = 6;

/// Upper limit accepted by [`TrendConfig::validate`] (ten years).
pub const MAX_HORIZON_MONTHS: usize = 120;

// ============================================================================
// Forecast Configuration
// ============================================================================

/// Trend forecast configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Months to project (default: 6).
    pub horizon_months: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl TrendConfig {
    pub fn new(horizon_months: usize) -> Self {
        Self { horizon_months }
    }

    /// Reject horizons beyond [`MAX_HORIZON_MONTHS`].
    pub fn validate(&self) -> Result<()> {
        if self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(TrendError::InvalidParameter {
                name: "horizon_months".to_string(),
                reason: format!("must be at most {}", MAX_HORIZON_MONTHS),
            });
        }
        Ok(())
    }
}
