//! Fitted linear trend.

use serde::{Deserialize, Serialize};

/// Linear trend `y = slope * x + intercept`.
///
/// `x` is the zero-based chronological index of a sample, not its calendar
/// date: missing months are not modelled as gaps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; `0.0` for degenerate fits.
    pub r_squared: f64,
}

impl RegressionModel {
    /// Value of the trend line at index `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at() {
        let model = RegressionModel {
            slope: 10.0,
            intercept: 10.0,
            r_squared: 1.0,
        };
        assert_eq!(model.value_at(0.0), 10.0);
        assert_eq!(model.value_at(4.0), 50.0);
    }

    #[test]
    fn test_default_is_flat_zero() {
        let model = RegressionModel::default();
        assert_eq!(model.value_at(100.0), 0.0);
        assert_eq!(model.r_squared, 0.0);
    }
}
