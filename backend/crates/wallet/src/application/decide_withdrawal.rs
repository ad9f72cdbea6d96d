//! Decide Withdrawal Use Case
//!
//! Applies an admin's verdict to a pending request. The repository makes
//! the transition single-shot, so two admins clicking at once produce one
//! decision and one refund at most.

use std::sync::Arc;

use uuid::Uuid;

use accounts::CurrentUser;
use kernel::id::WithdrawalId;

use crate::domain::repository::{DecidedWithdrawal, WithdrawalRepository};
use crate::domain::value_object::withdrawal_status::WithdrawalDecision;
use crate::error::WalletResult;

/// Decide withdrawal use case
pub struct DecideWithdrawalUseCase<W>
where
    W: WithdrawalRepository,
{
    withdrawal_repo: Arc<W>,
}

impl<W> DecideWithdrawalUseCase<W>
where
    W: WithdrawalRepository,
{
    pub fn new(withdrawal_repo: Arc<W>) -> Self {
        Self { withdrawal_repo }
    }

    pub async fn execute(
        &self,
        admin: &CurrentUser,
        withdrawal_id: Uuid,
        decision: WithdrawalDecision,
        note: Option<String>,
    ) -> WalletResult<DecidedWithdrawal> {
        let decided = self
            .withdrawal_repo
            .decide_request(
                WithdrawalId::from_uuid(withdrawal_id),
                decision,
                note.as_deref(),
            )
            .await?;

        tracing::info!(
            withdrawal_id = %decided.request.withdrawal_id,
            decided_by = %admin.public_id,
            status = %decided.request.status,
            refunded = decided.refunded.is_some(),
            "Withdrawal request decided"
        );

        Ok(decided)
    }
}
