//! Data models for monthly series.

mod event_counts;
mod time_point;
mod year_month;

pub use event_counts::MonthlyEventCounts;
pub use time_point::{values, TimePoint};
pub use year_month::YearMonth;
