//! Error types for series construction.

mod series_error;

pub use series_error::{Result, SeriesError};
