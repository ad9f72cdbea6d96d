//! Transaction History Use Case
//!
//! Paged ledger read, newest first. Fetches one row beyond the page to
//! learn whether another page exists without a second count query.

use std::sync::Arc;

use accounts::CurrentUser;

use crate::application::config::WalletConfig;
use crate::domain::entity::ledger_entry::LedgerEntry;
use crate::domain::repository::LedgerRepository;
use crate::error::WalletResult;

/// Transaction history output
pub struct TransactionHistoryOutput {
    /// Entries on this page, newest first
    pub entries: Vec<LedgerEntry>,
    /// 1-based page that was served
    pub page: u32,
    /// Whether at least one more page exists
    pub has_more: bool,
}

/// Transaction history use case
pub struct TransactionHistoryUseCase<L>
where
    L: LedgerRepository,
{
    ledger_repo: Arc<L>,
    config: Arc<WalletConfig>,
}

impl<L> TransactionHistoryUseCase<L>
where
    L: LedgerRepository,
{
    pub fn new(ledger_repo: Arc<L>, config: Arc<WalletConfig>) -> Self {
        Self {
            ledger_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        current: &CurrentUser,
        page: u32,
    ) -> WalletResult<TransactionHistoryOutput> {
        let page = page.max(1);
        let page_size = self.config.history_page_size;
        let offset = (page as i64 - 1) * page_size;

        let mut entries = self
            .ledger_repo
            .list_entries(&current.user_id, offset, page_size + 1)
            .await?;

        let has_more = entries.len() as i64 > page_size;
        entries.truncate(page_size as usize);

        Ok(TransactionHistoryOutput {
            entries,
            page,
            has_more,
        })
    }
}
