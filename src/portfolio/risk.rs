//! Per-loan risk derivation and portfolio queries.

use crate::types::{Loan, RiskStatus};

/// Worst status across all of a loan's covenants.
///
/// Every covenant is inspected, not just the first; a single breached
/// covenant marks the whole loan `Critical` regardless of position. A loan
/// with no covenants carries no active test and reports `Safe`.
pub fn loan_risk(loan: &Loan) -> RiskStatus {
    loan.covenants
        .iter()
        .map(|c| c.status)
        .max()
        .unwrap_or(RiskStatus::Safe)
}

/// Borrower names whose derived loan risk equals `status`, in portfolio order.
pub fn loans_with_status(loans: &[Loan], status: RiskStatus) -> Vec<&str> {
    loans
        .iter()
        .filter(|loan| loan_risk(loan) == status)
        .map(|loan| loan.borrower_name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Covenant;

    fn covenant(status: RiskStatus) -> Covenant {
        Covenant {
            name: "Test".to_string(),
            threshold: 1.0,
            actual: 1.0,
            status,
            insight: String::new(),
        }
    }

    fn loan(name: &str, statuses: &[RiskStatus]) -> Loan {
        Loan {
            id: 0,
            borrower_name: name.to_string(),
            amount: 1000.0,
            covenants: statuses.iter().copied().map(covenant).collect(),
        }
    }

    #[test]
    fn test_loan_risk_is_worst_covenant() {
        let l = loan("Acme", &[RiskStatus::Safe, RiskStatus::Critical, RiskStatus::Watch]);
        assert_eq!(loan_risk(&l), RiskStatus::Critical);
    }

    #[test]
    fn test_loan_risk_ignores_covenant_position() {
        // The breach is not in the first covenant and must still be seen.
        let l = loan("Acme", &[RiskStatus::Safe, RiskStatus::Safe, RiskStatus::Critical]);
        assert_eq!(loan_risk(&l), RiskStatus::Critical);
    }

    #[test]
    fn test_loan_without_covenants_is_safe() {
        let l = loan("Acme", &[]);
        assert_eq!(loan_risk(&l), RiskStatus::Safe);
    }

    #[test]
    fn test_query_preserves_portfolio_order() {
        let loans = vec![
            loan("Zeta", &[RiskStatus::Critical]),
            loan("Midway", &[RiskStatus::Safe]),
            loan("Alpha", &[RiskStatus::Critical]),
        ];
        let names = loans_with_status(&loans, RiskStatus::Critical);
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_query_matches_derived_not_first_covenant() {
        // First covenant Safe, second Critical: the loan is critical.
        let loans = vec![loan("Acme", &[RiskStatus::Safe, RiskStatus::Critical])];
        assert_eq!(
            loans_with_status(&loans, RiskStatus::Critical),
            vec!["Acme"]
        );
        assert!(loans_with_status(&loans, RiskStatus::Safe).is_empty());
    }

    #[test]
    fn test_query_empty_portfolio() {
        assert!(loans_with_status(&[], RiskStatus::Safe).is_empty());
    }
}
