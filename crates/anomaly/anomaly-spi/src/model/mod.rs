//! Data models for anomaly detection.
//!
//! This module contains data structures used throughout the anomaly detection system.

mod anomaly;
mod anomaly_result;
mod early_warning;

pub use anomaly::{Anomaly, AnomalyDirection, AnomalySeverity};
pub use anomaly_result::{AnomalyResult, MultiMetricResult};
pub use early_warning::{EarlyWarning, WarningKind, WarningSeverity};
