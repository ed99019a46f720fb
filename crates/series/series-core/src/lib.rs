//! Series Core
//!
//! Statistics primitives (mean, sample standard deviation, z-score) and the
//! chronological ordering every analytics routine applies before computing.

pub mod ordering;
pub mod stats;

// Re-export SPI types for implementations
pub use series_spi::{
    values, Chronological, MonthlyEventCounts, Result, SeriesError, TimePoint, YearMonth,
};

pub use ordering::{chronological, last_n};
pub use stats::{mean, std_dev, z_score};
