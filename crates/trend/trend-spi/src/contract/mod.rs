//! Contract definitions for trend forecasting.
//!
//! This module contains trait definitions that providers must implement.

mod trend_forecaster;

pub use trend_forecaster::TrendForecaster;
