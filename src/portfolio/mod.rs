//! Covenant risk evaluation engine.
//!
//! Pure, synchronous core of the backend. The portfolio enters every call as
//! a read-only slice; nothing here owns state, blocks, or touches I/O.
//!
//! ```text
//! +-----------+      +-----------+      +------------+
//! | classify  |      | loan_risk |----->| responder  |
//! | (derive)  |      | (worst of |      | (keyword   |
//! |           |      | covenants)|      |  routing)  |
//! +-----------+      +-----------+      +------------+
//!       |                  ^
//!       v                  |
//!   audit (stored vs derived status)
//! ```
//!
//! Stored covenant statuses are authoritative; `classify` is the documented
//! derivation rule and `audit_portfolio` reconciles the two.

mod classify;
mod responder;
mod risk;
mod seed;


pub use classify::{
    audit_portfolio, classify, AuditFinding, ClassifyRule, Direction, DEFAULT_WATCH_MARGIN,
};
pub use responder::{
    answer, Intent, FALLBACK_REPLY, GREETING_REPLY, NO_CRITICAL_RISK_REPLY,
};
pub use risk::{loan_risk, loans_with_status};
pub use seed::{demo_portfolio, demo_rule};
