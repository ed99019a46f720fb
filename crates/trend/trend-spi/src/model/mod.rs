//! Data models for trend forecasting.

mod prediction;
mod regression_model;
mod trend_forecast;

pub use prediction::Prediction;
pub use regression_model::RegressionModel;
pub use trend_forecast::{TrendForecast, TrendSummary};
