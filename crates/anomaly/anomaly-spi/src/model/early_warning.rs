//! Early-warning types.

use serde::{Deserialize, Serialize};

/// Which three-month trend raised the warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Resignations rising month over month.
    ResignationTrend,
    /// New-member intake falling month over month.
    MembershipDecline,
}

/// Early-warning severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Warning,
    Critical,
}

/// A warning raised from a monotonic trend over the last three months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyWarning {
    pub kind: WarningKind,
    pub severity: WarningSeverity,
    /// Rounded percent change across the window. Positive for
    /// resignation trends, negative for membership declines.
    pub percent_change: f64,
    pub message: String,
}
