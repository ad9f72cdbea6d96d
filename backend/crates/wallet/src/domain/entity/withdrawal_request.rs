//! Withdrawal Request Entity
//!
//! Funds are reserved the moment the request is created: the balance is
//! debited up front and only comes back through an explicit refund if an
//! admin rejects. A decided request is immutable.

use chrono::{DateTime, Utc};
use kernel::coins::Coins;
use kernel::id::WithdrawalId;

use accounts::models::user_id::UserId;

use crate::domain::value_object::{
    account_details::AccountDetails, payment_method::PaymentMethod,
    withdrawal_status::WithdrawalStatus,
};

/// Withdrawal request entity
#[derive(Debug, Clone)]
pub struct WithdrawalRequest {
    /// Internal UUID identifier
    pub withdrawal_id: WithdrawalId,
    /// Requesting user
    pub user_id: UserId,
    /// Requested amount (already reserved from the balance)
    pub amount: Coins,
    /// Payout channel
    pub payment_method: PaymentMethod,
    /// Payout destination supplied by the member
    pub account_details: AccountDetails,
    /// Lifecycle state
    pub status: WithdrawalStatus,
    /// Note the deciding admin left, if any
    pub admin_note: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// When the admin decision landed
    pub decided_at: Option<DateTime<Utc>>,
}

impl WithdrawalRequest {
    /// Create a new pending request
    pub fn new(
        user_id: UserId,
        amount: Coins,
        payment_method: PaymentMethod,
        account_details: AccountDetails,
    ) -> Self {
        Self {
            withdrawal_id: WithdrawalId::new(),
            user_id,
            amount,
            payment_method,
            account_details,
            status: WithdrawalStatus::Pending,
            admin_note: None,
            created_at: Utc::now(),
            decided_at: None,
        }
    }

    /// Check if a decision has already landed
    pub fn is_decided(&self) -> bool {
        !self.status.is_pending()
    }

    /// Mark approved
    pub fn approve(&mut self, note: Option<String>) {
        self.status = WithdrawalStatus::Approved;
        self.admin_note = note;
        self.decided_at = Some(Utc::now());
    }

    /// Mark rejected (the refund credit is the caller's responsibility)
    pub fn reject(&mut self, note: Option<String>) {
        self.status = WithdrawalStatus::Rejected;
        self.admin_note = note;
        self.decided_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> WithdrawalRequest {
        WithdrawalRequest::new(
            UserId::new(),
            Coins::from_whole(5_000),
            PaymentMethod::EasyPaisa,
            AccountDetails::new("03001234567").unwrap(),
        )
    }

    #[test]
    fn test_new_request_is_pending() {
        let request = sample_request();
        assert_eq!(request.status, WithdrawalStatus::Pending);
        assert!(!request.is_decided());
        assert!(request.admin_note.is_none());
        assert!(request.decided_at.is_none());
    }

    #[test]
    fn test_approve_stamps_decision() {
        let mut request = sample_request();
        request.approve(Some("Paid at 14:05".to_string()));

        assert_eq!(request.status, WithdrawalStatus::Approved);
        assert!(request.is_decided());
        assert_eq!(request.admin_note.as_deref(), Some("Paid at 14:05"));
        assert!(request.decided_at.is_some());
    }

    #[test]
    fn test_reject_stamps_decision() {
        let mut request = sample_request();
        request.reject(None);

        assert_eq!(request.status, WithdrawalStatus::Rejected);
        assert!(request.is_decided());
        assert!(request.decided_at.is_some());
    }
}
