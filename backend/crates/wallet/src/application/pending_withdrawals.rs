//! Pending Withdrawals Use Case
//!
//! The admin decision queue: every request still awaiting a verdict,
//! oldest first so the queue is worked in arrival order.

use std::sync::Arc;

use crate::domain::repository::{AdminReadRepository, AdminWithdrawalSummary};
use crate::error::WalletResult;

/// Pending withdrawals use case
pub struct PendingWithdrawalsUseCase<A>
where
    A: AdminReadRepository,
{
    admin_repo: Arc<A>,
}

impl<A> PendingWithdrawalsUseCase<A>
where
    A: AdminReadRepository,
{
    pub fn new(admin_repo: Arc<A>) -> Self {
        Self { admin_repo }
    }

    pub async fn execute(&self) -> WalletResult<Vec<AdminWithdrawalSummary>> {
        self.admin_repo.pending_withdrawals().await
    }
}
