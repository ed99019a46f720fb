//! Series error types.

use thiserror::Error;

/// Errors raised while building series values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
