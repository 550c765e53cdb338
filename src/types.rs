//! Core data model: loans and the covenants attached to them.

use serde::{Deserialize, Serialize};

/// Health of a single covenant test.
///
/// Ordered by severity: `Safe < Watch < Critical`. The derived `Ord` is what
/// loan-level risk folds over, so the variant order here is a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    /// Covenant holds with comfortable headroom
    Safe,
    /// Covenant holds but headroom is thin
    Watch,
    /// Covenant is breached
    Critical,
}

impl RiskStatus {
    /// Get display string for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Safe => "Safe",
            RiskStatus::Watch => "Watch",
            RiskStatus::Critical => "Critical",
        }
    }

    /// Is this status actionable (Watch or Critical)?
    pub fn is_actionable(&self) -> bool {
        matches!(self, RiskStatus::Watch | RiskStatus::Critical)
    }
}

/// A financial test attached to a loan facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Covenant {
    /// Covenant name, e.g. "Debt to Equity"
    pub name: String,
    /// Limit defined by the loan covenant terms
    pub threshold: f64,
    /// Latest observed value, refreshed by an external analysis feed
    pub actual: f64,
    /// Curated risk status. Authoritative as stored; `portfolio::classify`
    /// offers the independent derivation rule for auditing.
    pub status: RiskStatus,
    /// Analyst-facing explanation of why the status holds
    pub insight: String,
}

/// A borrowing entity and its covenants.
///
/// Covenants have no lifecycle of their own; they live and die with the loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier, immutable once assigned
    pub id: u64,
    /// Display name; not guaranteed unique across the portfolio
    pub borrower_name: String,
    /// Principal in USD, non-negative
    pub amount: f64,
    /// Ordered covenant list; may be empty
    #[serde(default)]
    pub covenants: Vec<Covenant>,
}
