//! Single monthly observation.

use serde::{Deserialize, Serialize};

use crate::contract::Chronological;
use crate::model::YearMonth;

/// One observed sample for one metric in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub year: i32,
    pub month: u32,
    pub value: f64,
}

impl TimePoint {
    pub fn new(year: i32, month: u32, value: f64) -> Self {
        Self { year, month, value }
    }
}

impl Chronological for TimePoint {
    fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

/// Extract the values of a slice of points, preserving order.
pub fn values(points: &[TimePoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}
