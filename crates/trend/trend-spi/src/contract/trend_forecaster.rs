//! Trend forecaster trait definition.

use series_spi::TimePoint;

use crate::model::TrendForecast;

/// Fits a trend to a monthly series and projects it forward.
///
/// Implementations are pure: the input order is irrelevant and degenerate
/// series (empty, single point, constant) yield well-defined zero values
/// instead of errors.
pub trait TrendForecaster: Send + Sync {
    /// Fit the series and project `horizon_months` months past its last month.
    fn forecast(&self, series: &[TimePoint], horizon_months: usize) -> TrendForecast;
}
