//! Account Overview Use Case
//!
//! The single read backing the member dashboard: balance, level, today's
//! claim quota, and a short strip of recent activity.

use std::sync::Arc;

use accounts::CurrentUser;
use platform::rate_limit::DailyQuota;

use crate::application::config::WalletConfig;
use crate::domain::entity::{ledger_entry::LedgerEntry, wallet_account::WalletAccount};
use crate::domain::repository::{ClaimRepository, DailySummary, LedgerRepository};
use crate::error::WalletResult;

/// Account overview output
pub struct AccountOverviewOutput {
    /// The account (zeroed default when the user never transacted)
    pub account: WalletAccount,
    /// Today's claim activity
    pub today: DailySummary,
    /// Claims still available today
    pub remaining_claims: u32,
    /// Latest ledger entries, newest first
    pub recent_activity: Vec<LedgerEntry>,
}

/// Account overview use case
pub struct AccountOverviewUseCase<L, C>
where
    L: LedgerRepository,
    C: ClaimRepository,
{
    ledger_repo: Arc<L>,
    claim_repo: Arc<C>,
    config: Arc<WalletConfig>,
}

impl<L, C> AccountOverviewUseCase<L, C>
where
    L: LedgerRepository,
    C: ClaimRepository,
{
    pub fn new(ledger_repo: Arc<L>, claim_repo: Arc<C>, config: Arc<WalletConfig>) -> Self {
        Self {
            ledger_repo,
            claim_repo,
            config,
        }
    }

    pub async fn execute(&self, current: &CurrentUser) -> WalletResult<AccountOverviewOutput> {
        let account = self.ledger_repo.fetch_account(&current.user_id).await?;
        let today = self.claim_repo.today_summary(&current.user_id).await?;
        let recent_activity = self
            .ledger_repo
            .recent_entries(&current.user_id, self.config.recent_activity_limit)
            .await?;

        let quota = DailyQuota::new(self.config.daily_claim_cap).status(today.claims);

        Ok(AccountOverviewOutput {
            account,
            today,
            remaining_claims: quota.remaining(),
            recent_activity,
        })
    }
}
