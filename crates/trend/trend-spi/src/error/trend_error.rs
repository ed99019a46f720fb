//! Trend error types.

use thiserror::Error;

/// Trend configuration errors.
///
/// Forecasting itself never fails; these only surface when validating
/// caller-supplied parameters.
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for trend operations.
pub type Result<T> = std::result::Result<T, TrendError>;
