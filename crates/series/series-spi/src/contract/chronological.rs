//! Chronological ordering trait.

use crate::model::YearMonth;

/// Anything keyed by a calendar month.
///
/// Implementors can be put into canonical (ascending) order before any
/// statistic is computed over them.
pub trait Chronological {
    /// Calendar month this sample belongs to.
    fn period(&self) -> YearMonth;
}
