//! Password recovery outcome classification.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Result of a password recovery lookup
///
/// Every variant is a terminal, reportable state; there is no retry
/// semantics. The approved directory wins outright over the pending
/// collection when both would match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum RecoveryOutcome {
    /// An approved record matched; the full record (including the plaintext
    /// password) is returned for display
    Recovered { user: User },

    /// Only a pending registration matched, still awaiting review
    PendingApproval,

    /// Only a pending registration matched, and it was rejected
    Rejected,

    /// Neither collection yielded a match
    NotFound,
}

impl RecoveryOutcome {
    /// Checks if credentials were recovered
    pub fn is_recovered(&self) -> bool {
        matches!(self, RecoveryOutcome::Recovered { .. })
    }

    /// Human-readable message shown for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            RecoveryOutcome::Recovered { .. } => "Credentials recovered successfully!",
            RecoveryOutcome::PendingApproval => {
                "Your registration is still pending approval. Please contact the administrator."
            }
            RecoveryOutcome::Rejected => {
                "Your registration was rejected. Please contact the administrator."
            }
            RecoveryOutcome::NotFound => {
                "User not found or phone number doesn't match our records."
            }
        }
    }
}
