//! Forecast output types.

use serde::{Deserialize, Serialize};

use crate::model::{Prediction, RegressionModel};

/// Fitted trend plus its projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendForecast {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// One entry per projected month, chronological.
    pub predictions: Vec<Prediction>,
}

impl TrendForecast {
    pub fn model(&self) -> RegressionModel {
        RegressionModel {
            slope: self.slope,
            intercept: self.intercept,
            r_squared: self.r_squared,
        }
    }
}

/// Dashboard view of a total-member series: forecast plus growth figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub forecast: TrendForecast,
    /// Percent change from the first to the last observed month.
    pub growth_rate: f64,
    /// Rounded mean month-over-month change.
    pub average_monthly_growth: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_view() {
        let forecast = TrendForecast {
            slope: 2.0,
            intercept: 5.0,
            r_squared: 0.9,
            predictions: Vec::new(),
        };
        let model = forecast.model();
        assert_eq!(model.slope, 2.0);
        assert_eq!(model.intercept, 5.0);
        assert_eq!(model.r_squared, 0.9);
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let forecast = TrendForecast {
            slope: 1.0,
            intercept: 0.0,
            r_squared: 1.0,
            predictions: vec![Prediction {
                year: 2025,
                month: 7,
                predicted_value: 12.0,
                lower_bound: 10.0,
                upper_bound: 14.0,
                confidence_percent: 100.0,
            }],
        };
        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["r_squared"], 1.0);
        assert_eq!(json["predictions"][0]["predicted_value"], 12.0);
        assert_eq!(json["predictions"][0]["confidence_percent"], 100.0);
    }
}
