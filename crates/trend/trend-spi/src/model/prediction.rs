//! Projected value for one future month.

use serde::{Deserialize, Serialize};
use series_spi::{Chronological, YearMonth};

/// Projected value for one future month with its 95% interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub year: i32,
    pub month: u32,
    /// Rounded, never negative.
    pub predicted_value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// R² of the fit as 0-100. A quality hint, not a statistical confidence level.
    pub confidence_percent: f64,
}

impl Chronological for Prediction {
    fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}
