//! Analytics defaults loaded from an optional JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anomaly_facade::ZScoreConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trend_facade::TrendConfig;

/// Defaults for every command; command-line flags take precedence.
///
/// ```json
/// { "trend": { "horizon_months": 12 }, "anomaly": { "threshold": 2.5 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub trend: TrendConfig,
    pub anomaly: ZScoreConfig,
}

impl AnalyticsConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        tracing::debug!(?config, "loaded analytics config");
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(mut self, horizon_months: Option<usize>, threshold: Option<f64>) -> Result<Self> {
        if let Some(horizon_months) = horizon_months {
            self.trend.horizon_months = horizon_months;
        }
        if let Some(threshold) = threshold {
            self.anomaly.threshold = threshold;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        self.trend.validate()?;
        self.anomaly.validate()?;
        Ok(())
    }
}
