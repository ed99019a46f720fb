//! Trend Forecasting Facade
//!
//! Unified re-exports for trend forecasting:
//! - `TrendForecaster` trait and result types from SPI
//! - Configuration types from API
//! - `LinearTrendForecaster` and growth helpers from Core

// Re-export everything from SPI
pub use trend_spi::*;

// Re-export everything from API
pub use trend_api::*;

// Re-export everything from Core
pub use trend_core::*;

// Input types
pub use series_spi::{Chronological, TimePoint, YearMonth};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LinearTrendForecaster, TrendForecaster};
    pub use crate::{Prediction, TrendForecast, TrendSummary};
    pub use crate::{TimePoint, TrendConfig, YearMonth};
}
