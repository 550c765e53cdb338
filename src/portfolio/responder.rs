//! Keyword-routed portfolio Q&A.
//!
//! Not a language model and not trying to be one: a fixed priority ladder of
//! case-insensitive substring checks over the message, each mapping to a
//! canned reply template. The ladder order is a contract: a message
//! containing both "risk" and "safe" must deterministically resolve to the
//! risk branch.
//!
//! Every call is a pure function of `(loans, message)`: no state across
//! calls, no randomness, no I/O. Unrecognized input falls through to the
//! help reply rather than an error.

use super::risk::loans_with_status;
use crate::types::{Loan, RiskStatus};

/// Fixed reply when no loan in the portfolio is at critical risk.
pub const NO_CRITICAL_RISK_REPLY: &str =
    "Good news! No critical risks detected in the portfolio.";

/// Fixed greeting reply.
pub const GREETING_REPLY: &str =
    "Hello! I am CovenantGuard AI. Ask me about portfolio risks or specific loans.";

/// Fixed fallback reply for unrecognized messages.
pub const FALLBACK_REPLY: &str =
    "I can analyze risks and covenant status. Try asking: 'Which loans are critical?'";

/// Resolved purpose of a free-text message.
///
/// Variant order is the matching priority, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "risk" or "critical" anywhere in the message
    RiskSummary,
    /// "safe" anywhere in the message
    SafeSummary,
    /// "hello" or "hi" anywhere in the message
    Greeting,
    /// Anything else
    Unknown,
}

impl Intent {
    /// Resolve a message to an intent. Case-insensitive; first match wins.
    pub fn detect(message: &str) -> Self {
        let msg = message.to_lowercase();
        if msg.contains("risk") || msg.contains("critical") {
            Intent::RiskSummary
        } else if msg.contains("safe") {
            Intent::SafeSummary
        } else if msg.contains("hello") || msg.contains("hi") {
            Intent::Greeting
        } else {
            Intent::Unknown
        }
    }
}

/// Answer a free-text portfolio question.
pub fn answer(loans: &[Loan], message: &str) -> String {
    match Intent::detect(message) {
        Intent::RiskSummary => {
            let risky = loans_with_status(loans, RiskStatus::Critical);
            if risky.is_empty() {
                NO_CRITICAL_RISK_REPLY.to_string()
            } else {
                format!(
                    "\u{26a0}\u{fe0f} Critical Alert: {} are currently at high risk due to covenant breaches.",
                    risky.join(", ")
                )
            }
        }
        Intent::SafeSummary => {
            let safe = loans_with_status(loans, RiskStatus::Safe);
            // An empty name list still renders through the template; the
            // reply shape does not change with portfolio contents.
            format!(
                "\u{2705} Safe Loans: {} are performing well.",
                safe.join(", ")
            )
        }
        Intent::Greeting => GREETING_REPLY.to_string(),
        Intent::Unknown => FALLBACK_REPLY.to_string(),
    }
}
