//! Entry Status Value Object
//!
//! Ledger entries carry a status so a member's history can show where a
//! withdrawal stands. Every entry already reflects an applied balance
//! mutation; the status never decides whether the amount counted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state shown on a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum EntryStatus {
    /// Settled - earnings, approved withdrawals, refunds
    #[default]
    Completed = 0,

    /// Linked withdrawal is awaiting an admin decision
    Pending = 1,

    /// Linked withdrawal was rejected (funds returned via a refund entry)
    Rejected = 2,
}

impl EntryStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Completed),
            1 => Some(Self::Pending),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(EntryStatus::Completed.id(), 0);
        assert_eq!(EntryStatus::Pending.id(), 1);
        assert_eq!(EntryStatus::Rejected.id(), 2);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for status in [
            EntryStatus::Completed,
            EntryStatus::Pending,
            EntryStatus::Rejected,
        ] {
            assert_eq!(EntryStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(EntryStatus::from_id(3), None);
    }

    #[test]
    fn test_default_is_completed() {
        assert_eq!(EntryStatus::default(), EntryStatus::Completed);
    }
}
