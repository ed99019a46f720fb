//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// Detection itself is total; these are raised only when validating
/// caller-supplied configuration.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
