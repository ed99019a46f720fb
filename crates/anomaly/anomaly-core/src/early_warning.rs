//! Early-warning heuristics
//!
//! Short-horizon trend checks over the three most recent months. They look at
//! monotonic direction only and are independent of z-score detection.

use anomaly_spi::{EarlyWarning, EarlyWarningRule, WarningKind, WarningSeverity};
use series_core::{chronological, last_n, MonthlyEventCounts};

/// Number of trailing months inspected.
pub const WARNING_WINDOW: usize = 3;

/// Resignation increase (percent) above which a warning is raised.
pub const RESIGNATION_WARNING_PCT: f64 = 50.0;
/// Resignation increase (percent) above which the warning is critical.
pub const RESIGNATION_CRITICAL_PCT: f64 = 100.0;
/// New-member decline (percent) above which a warning is raised.
pub const DECLINE_WARNING_PCT: f64 = 30.0;
/// New-member decline (percent) above which the warning is critical.
pub const DECLINE_CRITICAL_PCT: f64 = 60.0;

/// Percent of `from` that `delta` represents; `0` when `from` is zero.
fn percent_of(delta: f64, from: f64) -> f64 {
    if from == 0.0 {
        0.0
    } else {
        delta / from * 100.0
    }
}

// ============================================================================
// Resignation Trend
// ============================================================================

/// Resignations that never fell across the window and grew by more than 50%.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResignationTrendRule;

impl EarlyWarningRule for ResignationTrendRule {
    fn evaluate(&self, window: &[MonthlyEventCounts; 3]) -> Option<EarlyWarning> {
        let [first, second, third] = window.map(|row| row.resigned_members);
        if second < first || third < second {
            return None;
        }

        let change = percent_of(third - first, first);
        if change <= RESIGNATION_WARNING_PCT {
            return None;
        }

        let severity = if change > RESIGNATION_CRITICAL_PCT {
            WarningSeverity::Critical
        } else {
            WarningSeverity::Warning
        };
        let percent_change = change.round();

        Some(EarlyWarning {
            kind: WarningKind::ResignationTrend,
            severity,
            percent_change,
            message: format!(
                "Resignations rose {:.0}% over the last {} months",
                percent_change, WARNING_WINDOW
            ),
        })
    }
}

// ============================================================================
// Membership Decline
// ============================================================================

/// New-member intake that never rose across the window and fell by more than 30%.
///
/// The reported `percent_change` is negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipDeclineRule;

impl EarlyWarningRule for MembershipDeclineRule {
    fn evaluate(&self, window: &[MonthlyEventCounts; 3]) -> Option<EarlyWarning> {
        let [first, second, third] = window.map(|row| row.new_members);
        if second > first || third > second {
            return None;
        }

        let decline = percent_of(first - third, first);
        if decline <= DECLINE_WARNING_PCT {
            return None;
        }

        let severity = if decline > DECLINE_CRITICAL_PCT {
            WarningSeverity::Critical
        } else {
            WarningSeverity::Warning
        };
        let decline = decline.round();

        Some(EarlyWarning {
            kind: WarningKind::MembershipDecline,
            severity,
            percent_change: -decline,
            message: format!(
                "New member intake fell {:.0}% over the last {} months",
                decline, WARNING_WINDOW
            ),
        })
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Runs a set of rules over the trailing three months of a series.
pub struct EarlyWarningScanner {
    rules: Vec<Box<dyn EarlyWarningRule>>,
}

impl EarlyWarningScanner {
    /// Scanner with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; rules fire in insertion order.
    pub fn with_rule(mut self, rule: impl EarlyWarningRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Evaluate every rule over the last three months of `rows`.
    ///
    /// Fewer than three rows yield no warnings.
    pub fn scan(&self, rows: &[MonthlyEventCounts]) -> Vec<EarlyWarning> {
        if rows.len() < WARNING_WINDOW {
            return Vec::new();
        }

        let sorted = chronological(rows);
        let window: [MonthlyEventCounts; 3] = match last_n(&sorted, WARNING_WINDOW).try_into() {
            Ok(window) => window,
            Err(_) => return Vec::new(),
        };

        let warnings: Vec<EarlyWarning> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(&window))
            .collect();

        tracing::debug!(months = rows.len(), raised = warnings.len(), "early-warning scan complete");
        warnings
    }
}

impl Default for EarlyWarningScanner {
    /// Resignation trend first, then membership decline.
    fn default() -> Self {
        Self::empty()
            .with_rule(ResignationTrendRule)
            .with_rule(MembershipDeclineRule)
    }
}

/// Run the default resignation and decline rules over `rows`.
pub fn early_warnings(rows: &[MonthlyEventCounts]) -> Vec<EarlyWarning> {
    EarlyWarningScanner::default().scan(rows)
}
