//! Admin Users Use Case
//!
//! Full user listing for the moderation surface, optionally filtered by
//! standing. Wallet figures ride along so the admin sees balances without
//! another request.

use std::sync::Arc;

use accounts::models::user_status::UserStatus;

use crate::domain::repository::{AdminReadRepository, AdminUserSummary};
use crate::error::WalletResult;

/// Admin users use case
pub struct AdminUsersUseCase<A>
where
    A: AdminReadRepository,
{
    admin_repo: Arc<A>,
}

impl<A> AdminUsersUseCase<A>
where
    A: AdminReadRepository,
{
    pub fn new(admin_repo: Arc<A>) -> Self {
        Self { admin_repo }
    }

    pub async fn execute(
        &self,
        status: Option<UserStatus>,
    ) -> WalletResult<Vec<AdminUserSummary>> {
        self.admin_repo.list_users(status).await
    }
}
