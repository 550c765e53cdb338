//! Loan-covenant monitoring backend.
//!
//! Serves a loan portfolio and answers canned natural-language questions
//! about covenant risk. The core is a small, pure rules engine; everything
//! around it is boundary code:
//!
//! ```text
//! seeding tool ──► snapshot (JSON) ──► Vec<Loan> ──► portfolio engine ──► REST boundary
//!                                                    classify / loan_risk / answer
//! ```
//!
//! The engine holds no state and performs no I/O; the portfolio is injected
//! as a read-only snapshot wherever it is needed.

#![deny(unreachable_pub)]

mod errors;

pub mod logging;
pub mod portfolio;
pub mod server;
pub mod snapshot;
pub mod types;

pub use errors::{Error, Result};
pub use portfolio::{
    answer, classify, loan_risk, loans_with_status, ClassifyRule, Direction, Intent,
};
pub use types::{Covenant, Loan, RiskStatus};
