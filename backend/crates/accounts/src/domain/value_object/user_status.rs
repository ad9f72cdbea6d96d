//! User Status Value Object
//!
//! ## Design Decisions
//! - **2 statuses only**: Active, Blocked
//! - **No soft delete**: accounts are never hard-deleted; the ledger history
//!   must stay attributable
//! - Blocking gates future claims and withdrawal requests. It does not touch
//!   the balance or in-flight withdrawals, and read-only views keep working.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User account standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserStatus {
    /// Normal account - can claim rewards and request withdrawals
    #[default]
    Active = 0,

    /// Blocked by an admin - funds frozen in place, mutations rejected
    Blocked = 1,
}

impl UserStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
        }
    }

    /// Check if balance-mutating operations are allowed
    #[inline]
    pub const fn can_transact(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the account is blocked
    #[inline]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// The opposite standing (admin toggle)
    #[inline]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Blocked,
            Self::Blocked => Self::Active,
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Active),
            1 => Some(Self::Blocked),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(Self::Active),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod conversion {
        use super::*;

        #[test]
        fn test_ids_are_stable() {
            assert_eq!(UserStatus::Active.id(), 0);
            assert_eq!(UserStatus::Blocked.id(), 1);
        }

        #[test]
        fn test_from_id() {
            assert_eq!(UserStatus::from_id(0), Some(UserStatus::Active));
            assert_eq!(UserStatus::from_id(1), Some(UserStatus::Blocked));
            assert_eq!(UserStatus::from_id(2), None);
            assert_eq!(UserStatus::from_id(-1), None);
        }

        #[test]
        fn test_from_code() {
            assert_eq!(UserStatus::from_code("active"), Some(UserStatus::Active));
            assert_eq!(UserStatus::from_code("blocked"), Some(UserStatus::Blocked));
            assert_eq!(UserStatus::from_code("suspended"), None);
        }

        #[test]
        fn test_display() {
            assert_eq!(UserStatus::Active.to_string(), "active");
            assert_eq!(UserStatus::Blocked.to_string(), "blocked");
        }

        #[test]
        fn test_serde_roundtrip() {
            let json = serde_json::to_string(&UserStatus::Blocked).unwrap();
            let back: UserStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, UserStatus::Blocked);
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn test_can_transact() {
            assert!(UserStatus::Active.can_transact());
            assert!(!UserStatus::Blocked.can_transact());
        }

        #[test]
        fn test_is_blocked() {
            assert!(!UserStatus::Active.is_blocked());
            assert!(UserStatus::Blocked.is_blocked());
        }

        #[test]
        fn test_toggled_is_involutive() {
            assert_eq!(UserStatus::Active.toggled(), UserStatus::Blocked);
            assert_eq!(UserStatus::Blocked.toggled(), UserStatus::Active);
            assert_eq!(UserStatus::Active.toggled().toggled(), UserStatus::Active);
        }

        #[test]
        fn test_default_is_active() {
            assert_eq!(UserStatus::default(), UserStatus::Active);
        }
    }
}
