//! Ledger Entry Entity
//!
//! Append-only record of every balance mutation. Entries are never updated
//! after the fact except for the status field, which tracks the linked
//! withdrawal's lifecycle for display.

use chrono::{DateTime, Utc};
use kernel::coins::Coins;
use kernel::id::{LedgerEntryId, WithdrawalId};

use accounts::models::user_id::UserId;

use crate::domain::value_object::{entry_status::EntryStatus, transaction_kind::TransactionKind};

/// Description recorded for ad reward credits
pub const AD_REWARD_DESCRIPTION: &str = "Ad reward";

/// Description recorded for the refund credit of a rejected withdrawal
pub const REFUND_DESCRIPTION: &str = "Withdrawal refund";

/// Ledger entry entity
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Internal UUID identifier
    pub entry_id: LedgerEntryId,
    /// Owning user
    pub user_id: UserId,
    /// Earning or withdrawal
    pub kind: TransactionKind,
    /// Unsigned amount; the kind decides the displayed sign
    pub amount: Coins,
    /// Lifecycle state (pending/rejected only for withdrawal-linked entries)
    pub status: EntryStatus,
    /// Human-readable description shown in the history
    pub description: String,
    /// Withdrawal request this entry belongs to, if any
    pub withdrawal_id: Option<WithdrawalId>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Record a settled credit
    pub fn earning(user_id: UserId, amount: Coins, description: impl Into<String>) -> Self {
        Self {
            entry_id: LedgerEntryId::new(),
            user_id,
            kind: TransactionKind::Earning,
            amount,
            status: EntryStatus::Completed,
            description: description.into(),
            withdrawal_id: None,
            created_at: Utc::now(),
        }
    }

    /// Record the debit that reserves funds for a withdrawal request
    pub fn withdrawal(
        user_id: UserId,
        amount: Coins,
        withdrawal_id: WithdrawalId,
        description: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: LedgerEntryId::new(),
            user_id,
            kind: TransactionKind::Withdrawal,
            amount,
            status: EntryStatus::Pending,
            description: description.into(),
            withdrawal_id: Some(withdrawal_id),
            created_at: Utc::now(),
        }
    }

    /// Record a settled debit not tied to a withdrawal request
    pub fn debit(user_id: UserId, amount: Coins, description: impl Into<String>) -> Self {
        Self {
            entry_id: LedgerEntryId::new(),
            user_id,
            kind: TransactionKind::Withdrawal,
            amount,
            status: EntryStatus::Completed,
            description: description.into(),
            withdrawal_id: None,
            created_at: Utc::now(),
        }
    }

    /// Record the credit that returns funds after a rejection
    pub fn refund(user_id: UserId, amount: Coins, withdrawal_id: WithdrawalId) -> Self {
        Self {
            entry_id: LedgerEntryId::new(),
            user_id,
            kind: TransactionKind::Earning,
            amount,
            status: EntryStatus::Completed,
            description: REFUND_DESCRIPTION.to_string(),
            withdrawal_id: Some(withdrawal_id),
            created_at: Utc::now(),
        }
    }

    /// Amount with the display sign applied (earnings +, withdrawals -)
    pub fn signed_milli(&self) -> i64 {
        if self.kind.is_credit() {
            self.amount.milli()
        } else {
            -self.amount.milli()
        }
    }

    /// Move the entry to a new lifecycle state
    pub fn set_status(&mut self, status: EntryStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earning_is_completed_and_unlinked() {
        let entry = LedgerEntry::earning(UserId::new(), Coins::from_whole(10), AD_REWARD_DESCRIPTION);
        assert_eq!(entry.kind, TransactionKind::Earning);
        assert_eq!(entry.status, EntryStatus::Completed);
        assert!(entry.withdrawal_id.is_none());
        assert_eq!(entry.signed_milli(), 10_000);
    }

    #[test]
    fn test_withdrawal_starts_pending_and_linked() {
        let withdrawal_id = WithdrawalId::new();
        let entry = LedgerEntry::withdrawal(
            UserId::new(),
            Coins::from_whole(5_000),
            withdrawal_id,
            "Withdrawal via EasyPaisa",
        );
        assert_eq!(entry.kind, TransactionKind::Withdrawal);
        assert_eq!(entry.status, EntryStatus::Pending);
        assert_eq!(entry.withdrawal_id, Some(withdrawal_id));
        assert_eq!(entry.signed_milli(), -5_000_000);
    }

    #[test]
    fn test_refund_is_positive_earning() {
        let entry = LedgerEntry::refund(UserId::new(), Coins::from_whole(5_000), WithdrawalId::new());
        assert_eq!(entry.kind, TransactionKind::Earning);
        assert_eq!(entry.description, REFUND_DESCRIPTION);
        assert!(entry.signed_milli() > 0);
    }
}
