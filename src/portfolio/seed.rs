//! Built-in demo portfolio.
//!
//! Three borrowers, one covenant each, spanning all three risk buckets.
//! The statuses here are curated data and are internally consistent with
//! the classification rules in [`demo_rule`].

use super::classify::{ClassifyRule, Direction};
use crate::types::{Covenant, Loan, RiskStatus};

/// Build the demo portfolio used by the dashboard and the seeding tool.
pub fn demo_portfolio() -> Vec<Loan> {
    vec![
        Loan {
            id: 1,
            borrower_name: "Apex Global Logistics".to_string(),
            amount: 5_000_000.0,
            covenants: vec![Covenant {
                name: "Debt to Equity".to_string(),
                threshold: 2.0,
                actual: 2.45,
                status: RiskStatus::Critical,
                insight: "Debt spiked by 20% post-merger, breaching the 2.0 limit."
                    .to_string(),
            }],
        },
        Loan {
            id: 2,
            borrower_name: "GreenLeaf Energy".to_string(),
            amount: 1_200_000.0,
            covenants: vec![Covenant {
                name: "Interest Coverage".to_string(),
                threshold: 3.0,
                actual: 3.1,
                status: RiskStatus::Watch,
                insight: "Operating income dropped, coverage is thin but safe."
                    .to_string(),
            }],
        },
        Loan {
            id: 3,
            borrower_name: "MediCare Systems".to_string(),
            amount: 3_500_000.0,
            covenants: vec![Covenant {
                name: "Current Ratio".to_string(),
                threshold: 1.5,
                actual: 1.8,
                status: RiskStatus::Safe,
                insight: "Liquidity remains strong.".to_string(),
            }],
        },
    ]
}

/// Classification rule assignment for the demo covenants.
///
/// Debt to Equity is a leverage ratio (breach above the limit); Interest
/// Coverage and Current Ratio breach below it. Unknown covenant names get no
/// rule and are skipped by the audit.
pub fn demo_rule(covenant: &Covenant) -> Option<ClassifyRule> {
    match covenant.name.as_str() {
        "Debt to Equity" => Some(ClassifyRule::new(Direction::HigherIsRiskier)),
        "Interest Coverage" | "Current Ratio" => {
            Some(ClassifyRule::new(Direction::LowerIsRiskier))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::audit_portfolio;

    #[test]
    fn test_demo_portfolio_shape() {
        let loans = demo_portfolio();
        assert_eq!(loans.len(), 3);
        assert!(loans.iter().all(|l| !l.covenants.is_empty()));
        assert!(loans.iter().all(|l| l.amount >= 0.0));

        // Ids are unique and stable.
        let ids: Vec<u64> = loans.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_demo_covers_every_risk_bucket() {
        let loans = demo_portfolio();
        let statuses: Vec<RiskStatus> =
            loans.iter().map(|l| l.covenants[0].status).collect();
        assert!(statuses.contains(&RiskStatus::Safe));
        assert!(statuses.contains(&RiskStatus::Watch));
        assert!(statuses.contains(&RiskStatus::Critical));
    }

    #[test]
    fn test_demo_statuses_agree_with_classification_rules() {
        // The curated statuses and the derivation rule must not drift apart.
        let loans = demo_portfolio();
        let findings = audit_portfolio(&loans, demo_rule);
        assert!(findings.is_empty(), "divergent covenants: {findings:?}");
    }

    #[test]
    fn test_every_demo_covenant_has_a_rule() {
        for loan in demo_portfolio() {
            for covenant in &loan.covenants {
                assert!(demo_rule(covenant).is_some(), "no rule for {}", covenant.name);
            }
        }
    }
}
