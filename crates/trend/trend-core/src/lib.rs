//! Trend Forecasting Core
//!
//! Index-based least-squares trend fitting, projection with residual-based
//! bounds, and growth figures for total-member series.

pub mod forecaster;
pub mod growth;
pub mod regression;

// Re-export SPI traits for implementations
pub use trend_spi::{Prediction, RegressionModel, TrendForecast, TrendForecaster, TrendSummary};

pub use forecaster::{forecast, summarize, LinearTrendForecaster};
pub use growth::{average_monthly_growth, growth_rate};
pub use regression::{fit_index_trend, TrendFit};
