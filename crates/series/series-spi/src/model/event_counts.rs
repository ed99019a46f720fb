//! Per-month membership event counts.

use serde::{Deserialize, Serialize};

use crate::contract::Chronological;
use crate::model::{TimePoint, YearMonth};

/// Membership events aggregated for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEventCounts {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub new_members: f64,
    #[serde(default)]
    pub resigned_members: f64,
    #[serde(default)]
    pub expelled_members: f64,
}

impl MonthlyEventCounts {
    pub fn new(
        year: i32,
        month: u32,
        new_members: f64,
        resigned_members: f64,
        expelled_members: f64,
    ) -> Self {
        Self {
            year,
            month,
            new_members,
            resigned_members,
            expelled_members,
        }
    }

    pub fn new_members_point(&self) -> TimePoint {
        TimePoint::new(self.year, self.month, self.new_members)
    }

    pub fn resigned_members_point(&self) -> TimePoint {
        TimePoint::new(self.year, self.month, self.resigned_members)
    }

    pub fn expelled_members_point(&self) -> TimePoint {
        TimePoint::new(self.year, self.month, self.expelled_members)
    }
}

impl Chronological for MonthlyEventCounts {
    fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}
