//! Anomaly Detection Service Provider Interface
//!
//! Defines traits and types for z-score anomaly detection and the
//! three-month early-warning heuristics.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnomalyDetector, EarlyWarningRule};
pub use error::{AnomalyError, Result};
pub use model::{
    Anomaly, AnomalyDirection, AnomalyResult, AnomalySeverity, EarlyWarning, MultiMetricResult,
    WarningKind, WarningSeverity,
};
