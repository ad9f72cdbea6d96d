//! Admin Stats Use Case
//!
//! Dashboard snapshot: platform-wide ledger aggregates plus the latest
//! registrations and withdrawal requests.

use std::sync::Arc;

use crate::application::config::WalletConfig;
use crate::domain::repository::{
    AdminReadRepository, AdminUserSummary, AdminWithdrawalSummary, LedgerAggregates,
};
use crate::error::WalletResult;

/// Admin stats output
pub struct AdminStatsOutput {
    /// Platform-wide totals
    pub aggregates: LedgerAggregates,
    /// Latest registrations, newest first
    pub recent_users: Vec<AdminUserSummary>,
    /// Latest withdrawal requests, newest first
    pub recent_withdrawals: Vec<AdminWithdrawalSummary>,
}

/// Admin stats use case
pub struct AdminStatsUseCase<A>
where
    A: AdminReadRepository,
{
    admin_repo: Arc<A>,
    config: Arc<WalletConfig>,
}

impl<A> AdminStatsUseCase<A>
where
    A: AdminReadRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<WalletConfig>) -> Self {
        Self { admin_repo, config }
    }

    pub async fn execute(&self) -> WalletResult<AdminStatsOutput> {
        let aggregates = self.admin_repo.aggregate_stats().await?;
        let recent_users = self
            .admin_repo
            .recent_users(self.config.recent_activity_limit)
            .await?;
        let recent_withdrawals = self
            .admin_repo
            .recent_withdrawals(self.config.recent_activity_limit)
            .await?;

        Ok(AdminStatsOutput {
            aggregates,
            recent_users,
            recent_withdrawals,
        })
    }
}
