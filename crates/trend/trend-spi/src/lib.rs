//! Trend Forecasting Service Provider Interface
//!
//! Defines the forecaster contract and the regression/prediction types it
//! produces.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::TrendForecaster;
pub use error::{Result, TrendError};
pub use model::{Prediction, RegressionModel, TrendForecast, TrendSummary};
