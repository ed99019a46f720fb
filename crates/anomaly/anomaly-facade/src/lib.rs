//! Anomaly Detection Facade
//!
//! Unified re-exports for the anomaly detection module.
//!
//! This facade provides a single entry point to all anomaly detection functionality:
//! - `AnomalyDetector` / `EarlyWarningRule` traits and result types from SPI
//! - Configuration types from API
//! - `ZScoreDetector`, multi-metric detection and early-warning rules from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;

// Input types
pub use series_spi::{Chronological, MonthlyEventCounts, TimePoint, YearMonth};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnomalyDetector, EarlyWarningRule};
    pub use crate::{Anomaly, AnomalyResult, EarlyWarning, MultiMetricResult};
    pub use crate::{AnomalyDirection, AnomalySeverity, WarningKind, WarningSeverity};
    pub use crate::{EarlyWarningScanner, ZScoreConfig, ZScoreDetector};
    pub use crate::{MonthlyEventCounts, TimePoint};
}
