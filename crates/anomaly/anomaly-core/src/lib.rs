//! Anomaly Detection Core
//!
//! Implementations for z-score anomaly detection, multi-metric fan-out, and
//! the three-month early-warning rules.

mod detectors;
mod early_warning;
mod multi_metric;

pub use detectors::*;
pub use early_warning::*;
pub use multi_metric::*;
