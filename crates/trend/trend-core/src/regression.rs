//! Index-based ordinary least squares
//!
//! Fits `y = slope * i + intercept` where `i` is the position of each value in
//! the (already chronological) slice. Calendar gaps are deliberately ignored:
//! consecutive samples are always one unit apart.

use series_core::stats;
use trend_spi::RegressionModel;

/// A fitted trend together with its in-sample residuals.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit {
    pub model: RegressionModel,
    /// `y[i] - (slope * i + intercept)` for every input value.
    pub residuals: Vec<f64>,
}

impl TrendFit {
    /// Sample standard deviation of the residuals.
    pub fn residual_std_dev(&self) -> f64 {
        stats::std_dev(&self.residuals)
    }
}

/// Fit a linear trend over the index of each value.
///
/// Fewer than two values give a flat line through the only value (or zero)
/// with `r_squared = 0`. A constant series also reports `r_squared = 0`.
pub fn fit_index_trend(values: &[f64]) -> TrendFit {
    let n = values.len();
    if n < 2 {
        let intercept = values.first().copied().unwrap_or(0.0);
        return TrendFit {
            model: RegressionModel {
                slope: 0.0,
                intercept,
                r_squared: 0.0,
            },
            residuals: values.iter().map(|&y| y - intercept).collect(),
        };
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = stats::mean(values);

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        covariance += dx * (y - y_mean);
        variance += dx * dx;
    }

    // n >= 2 guarantees a positive index variance.
    let slope = covariance / variance;
    let intercept = y_mean - slope * x_mean;

    let residuals: Vec<f64> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| y - (slope * i as f64 + intercept))
        .collect();

    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    let ss_tot: f64 = values.iter().map(|&y| (y - y_mean).powi(2)).sum();
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    TrendFit {
        model: RegressionModel {
            slope,
            intercept,
            r_squared,
        },
        residuals,
    }
}
