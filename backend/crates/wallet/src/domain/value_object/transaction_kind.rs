//! Transaction Kind Value Object
//!
//! ## Design Decisions
//! - **2 kinds only**: Earning, Withdrawal. Refunds are recorded as earnings
//!   with a dedicated description rather than a third kind, so the display
//!   sign convention stays trivial
//! - Amounts are stored unsigned; the kind alone decides the sign shown to
//!   the member (earnings positive, withdrawals negative)

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a ledger entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum TransactionKind {
    /// Coins flowing into the account (ad rewards, refunds)
    Earning = 0,

    /// Coins flowing out of the account (payout requests)
    Withdrawal = 1,
}

impl TransactionKind {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Earning => "earning",
            Self::Withdrawal => "withdrawal",
        }
    }

    /// Whether entries of this kind add to the balance
    #[inline]
    pub const fn is_credit(&self) -> bool {
        matches!(self, Self::Earning)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Earning),
            1 => Some(Self::Withdrawal),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "earning" => Some(Self::Earning),
            "withdrawal" => Some(Self::Withdrawal),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
