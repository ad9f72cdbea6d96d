//! Withdrawal Status Value Object
//!
//! ## Design Decisions
//! - **Single transition**: Pending -> Approved or Pending -> Rejected, once.
//!   Decided requests never reopen
//! - The admin decision verb is its own type so a handler can never pass
//!   Pending where a decision is expected

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a withdrawal request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum WithdrawalStatus {
    /// Funds reserved, waiting for an admin decision
    #[default]
    Pending = 0,

    /// Admin approved - funds leave the system
    Approved = 1,

    /// Admin rejected - funds were refunded
    Rejected = 2,
}

impl WithdrawalStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Check if the request still awaits a decision
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Pending),
            1 => Some(Self::Approved),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Admin Decision
// ============================================================================

/// The verdict an admin hands down on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalDecision {
    Approve,
    Reject,
}

impl WithdrawalDecision {
    /// The terminal status this decision moves the request to
    #[inline]
    pub const fn terminal_status(&self) -> WithdrawalStatus {
        match self {
            Self::Approve => WithdrawalStatus::Approved,
            Self::Reject => WithdrawalStatus::Rejected,
        }
    }

    /// Whether the reserved funds go back to the member
    #[inline]
    pub const fn refunds(&self) -> bool {
        matches!(self, Self::Reject)
    }

    /// Parse the wire form ("approved" / "rejected")
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approve),
            "rejected" => Some(Self::Reject),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(WithdrawalStatus::Pending.id(), 0);
        assert_eq!(WithdrawalStatus::Approved.id(), 1);
        assert_eq!(WithdrawalStatus::Rejected.id(), 2);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for status in [
            WithdrawalStatus::Pending,
            WithdrawalStatus::Approved,
            WithdrawalStatus::Rejected,
        ] {
            assert_eq!(WithdrawalStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(WithdrawalStatus::from_id(7), None);
    }

    #[test]
    fn test_only_pending_awaits_decision() {
        assert!(WithdrawalStatus::Pending.is_pending());
        assert!(!WithdrawalStatus::Approved.is_pending());
        assert!(!WithdrawalStatus::Rejected.is_pending());
    }

    #[test]
    fn test_decision_terminal_status() {
        assert_eq!(
            WithdrawalDecision::Approve.terminal_status(),
            WithdrawalStatus::Approved
        );
        assert_eq!(
            WithdrawalDecision::Reject.terminal_status(),
            WithdrawalStatus::Rejected
        );
    }

    #[test]
    fn test_only_rejection_refunds() {
        assert!(!WithdrawalDecision::Approve.refunds());
        assert!(WithdrawalDecision::Reject.refunds());
    }

    #[test]
    fn test_decision_from_code() {
        assert_eq!(
            WithdrawalDecision::from_code("approved"),
            Some(WithdrawalDecision::Approve)
        );
        assert_eq!(
            WithdrawalDecision::from_code("rejected"),
            Some(WithdrawalDecision::Reject)
        );
        // A decision can never be "pending"
        assert_eq!(WithdrawalDecision::from_code("pending"), None);
        assert_eq!(WithdrawalDecision::from_code("Approved"), None);
    }
}
