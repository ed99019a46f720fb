//! Error types for trend configuration.

mod trend_error;

pub use trend_error::{Result, TrendError};
