//! Series Service Provider Interface
//!
//! Calendar-month keyed samples shared by the trend and anomaly crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Chronological;
pub use error::{Result, SeriesError};
pub use model::{values, MonthlyEventCounts, TimePoint, YearMonth};
