//! Covenant classification rule.
//!
//! Stored covenant statuses are curated upstream and stay authoritative.
//! This module provides the independent derivation path: given a threshold,
//! an observed value, and the breach direction of the ratio, compute the
//! status the rule would assign. [`audit_portfolio`] compares the two and
//! reports divergence without ever overwriting the stored status.

use serde::{Deserialize, Serialize};

use crate::types::{Covenant, Loan, RiskStatus};

/// Default watch margin: within 10% of breaching maps to `Watch`.
pub const DEFAULT_WATCH_MARGIN: f64 = 1.1;

/// Which side of the threshold is a breach for a given ratio.
///
/// Never inferred from the covenant name; callers state it explicitly per
/// covenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Breach when the observed value falls below the threshold
    /// (coverage and liquidity ratios).
    LowerIsRiskier,
    /// Breach when the observed value rises above the threshold
    /// (leverage ratios).
    HigherIsRiskier,
}

/// Classification rule: breach direction plus the watch margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRule {
    /// Breach direction for the ratio under test
    pub direction: Direction,
    /// Ratio margin around the threshold that maps to `Watch`.
    /// 1.1 means "within 10% of breaching". Must be >= 1.0.
    pub watch_margin: f64,
}

impl ClassifyRule {
    /// Create a rule with the default watch margin.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            watch_margin: DEFAULT_WATCH_MARGIN,
        }
    }

    /// Create a rule with a custom watch margin.
    pub fn with_watch_margin(mut self, margin: f64) -> Self {
        self.watch_margin = margin;
        self
    }

    /// Validate invariants for the rule.
    ///
    /// A margin below 1.0 would put the watch band on the breached side of
    /// the threshold, making `Watch` unreachable.
    pub fn validate(&self) -> Result<(), String> {
        if !self.watch_margin.is_finite() || self.watch_margin < 1.0 {
            return Err(format!(
                "watch_margin must be finite and >= 1.0, got {}",
                self.watch_margin
            ));
        }
        Ok(())
    }

    /// Classify an observed value against a threshold under this rule.
    pub fn classify(&self, threshold: f64, actual: f64) -> RiskStatus {
        classify(threshold, actual, self)
    }
}

/// Classify an observed value against its covenant threshold.
///
/// Deterministic and total: same `(threshold, actual, rule)` always yields
/// the same status. The watch band is symmetric in ratio space: for
/// lower-is-riskier ratios it spans `[threshold, threshold * margin)`, for
/// higher-is-riskier ratios `(threshold / margin, threshold]`.
pub fn classify(threshold: f64, actual: f64, rule: &ClassifyRule) -> RiskStatus {
    match rule.direction {
        Direction::LowerIsRiskier => {
            if actual < threshold {
                RiskStatus::Critical
            } else if actual < threshold * rule.watch_margin {
                RiskStatus::Watch
            } else {
                RiskStatus::Safe
            }
        }
        Direction::HigherIsRiskier => {
            if actual > threshold {
                RiskStatus::Critical
            } else if actual > threshold / rule.watch_margin {
                RiskStatus::Watch
            } else {
                RiskStatus::Safe
            }
        }
    }
}

/// One stored-vs-derived divergence found by [`audit_portfolio`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuditFinding {
    /// Borrower whose covenant diverged
    pub borrower_name: String,
    /// Covenant under test
    pub covenant_name: String,
    /// Status as stored in the portfolio
    pub stored: RiskStatus,
    /// Status the classification rule derives
    pub derived: RiskStatus,
}

/// Recompute every covenant status under the caller's rule assignment and
/// report covenants whose stored status differs.
///
/// Stored statuses stay authoritative; findings are informational. Covenants
/// the caller has no rule for (`None`) are skipped.
pub fn audit_portfolio<F>(loans: &[Loan], rule_for: F) -> Vec<AuditFinding>
where
    F: Fn(&Covenant) -> Option<ClassifyRule>,
{
    let mut findings = Vec::new();
    for loan in loans {
        for covenant in &loan.covenants {
            let Some(rule) = rule_for(covenant) else {
                continue;
            };
            let derived = classify(covenant.threshold, covenant.actual, &rule);
            if derived != covenant.status {
                findings.push(AuditFinding {
                    borrower_name: loan.borrower_name.clone(),
                    covenant_name: covenant.name.clone(),
                    stored: covenant.status,
                    derived,
                });
            }
        }
    }
    findings
}
