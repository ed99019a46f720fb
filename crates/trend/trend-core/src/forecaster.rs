//! Linear trend forecaster
//!
//! Projects a total-member series forward along its least-squares trend with a
//! 95% band derived from the spread of in-sample residuals.
//!
//! # Example
//!
//! ```rust
//! use series_spi::TimePoint;
//! use trend_core::forecast;
//!
//! let series = vec![
//!     TimePoint::new(2025, 1, 10.0),
//!     TimePoint::new(2025, 2, 20.0),
//!     TimePoint::new(2025, 3, 30.0),
//!     TimePoint::new(2025, 4, 40.0),
//! ];
//! let result = forecast(&series, 6);
//! assert_eq!(result.predictions[0].predicted_value, 50.0);
//! ```

use series_core::{chronological, values, Chronological, TimePoint, YearMonth};
use trend_api::{TrendConfig, DEFAULT_HORIZON_MONTHS};
use trend_spi::{Prediction, TrendForecast, TrendForecaster, TrendSummary};

use crate::growth::{average_monthly_growth, growth_rate};
use crate::regression::fit_index_trend;

/// Two-sided 95% quantile of the standard normal distribution.
const Z_95: f64 = 1.96;

/// Ordinary least-squares trend forecaster.
///
/// Without observations the projection is anchored on the current calendar
/// month, which can be pinned with [`LinearTrendForecaster::with_reference_month`].
#[derive(Debug, Clone, Default)]
pub struct LinearTrendForecaster {
    reference_month: Option<YearMonth>,
}

impl LinearTrendForecaster {
    /// Create a forecaster anchored on the wall clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `month` instead of the wall clock as "now" for empty series.
    pub fn with_reference_month(mut self, month: YearMonth) -> Self {
        self.reference_month = Some(month);
        self
    }

    /// Forecast with the horizon taken from `config`.
    pub fn forecast_with_config(&self, series: &[TimePoint], config: &TrendConfig) -> TrendForecast {
        self.forecast(series, config.horizon_months)
    }

    /// Forecast plus first-to-last growth figures.
    pub fn summarize(&self, series: &[TimePoint], horizon_months: usize) -> TrendSummary {
        TrendSummary {
            forecast: self.forecast(series, horizon_months),
            growth_rate: growth_rate(series),
            average_monthly_growth: average_monthly_growth(series),
        }
    }

    fn anchor(&self, last: Option<&TimePoint>) -> YearMonth {
        match last {
            Some(point) => point.period(),
            // The first projected month of an empty series is "now".
            None => self
                .reference_month
                .unwrap_or_else(YearMonth::current)
                .previous(),
        }
    }
}

impl TrendForecaster for LinearTrendForecaster {
    fn forecast(&self, series: &[TimePoint], horizon_months: usize) -> TrendForecast {
        let sorted = chronological(series);
        let ys = values(&sorted);
        let fit = fit_index_trend(&ys);
        let model = fit.model;

        let margin = Z_95 * fit.residual_std_dev();
        let confidence_percent = (model.r_squared * 100.0).clamp(0.0, 100.0);
        let last_index = ys.len() as f64 - 1.0;

        let mut period = self.anchor(sorted.last());
        let mut predictions = Vec::with_capacity(horizon_months);
        for step in 1..=horizon_months {
            period = period.next();
            let predicted = non_negative(model.value_at(last_index + step as f64).round());
            predictions.push(Prediction {
                year: period.year,
                month: period.month,
                predicted_value: predicted,
                lower_bound: non_negative((predicted - margin).round()),
                upper_bound: (predicted + margin).round(),
                confidence_percent,
            });
        }

        tracing::debug!(
            points = ys.len(),
            slope = model.slope,
            intercept = model.intercept,
            r_squared = model.r_squared,
            horizon = horizon_months,
            "fitted membership trend"
        );

        TrendForecast {
            slope: model.slope,
            intercept: model.intercept,
            r_squared: model.r_squared,
            predictions,
        }
    }
}

/// Forecast `series` with a wall-clock anchored [`LinearTrendForecaster`].
pub fn forecast(series: &[TimePoint], horizon_months: usize) -> TrendForecast {
    LinearTrendForecaster::new().forecast(series, horizon_months)
}

/// Forecast and growth figures over the default six-month horizon unless told otherwise.
pub fn summarize(series: &[TimePoint], horizon_months: Option<usize>) -> TrendSummary {
    LinearTrendForecaster::new().summarize(series, horizon_months.unwrap_or(DEFAULT_HORIZON_MONTHS))
}

// Membership counts cannot go negative; also folds -0.0 into 0.0.
fn non_negative(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}
