//! Application Layer
//!
//! Use cases orchestrating domain entities and repositories.

pub mod account_overview;
pub mod admin_stats;
pub mod admin_users;
pub mod claim_reward;
pub mod config;
pub mod decide_withdrawal;
pub mod issue_challenge;
pub mod pending_withdrawals;
pub mod request_withdrawal;
pub mod transaction_history;

// Re-exports
pub use account_overview::{AccountOverviewOutput, AccountOverviewUseCase};
pub use admin_stats::{AdminStatsOutput, AdminStatsUseCase};
pub use admin_users::AdminUsersUseCase;
pub use claim_reward::{ClaimRewardInput, ClaimRewardOutput, ClaimRewardUseCase};
pub use config::WalletConfig;
pub use decide_withdrawal::DecideWithdrawalUseCase;
pub use issue_challenge::{IssueChallengeOutput, IssueChallengeUseCase};
pub use pending_withdrawals::PendingWithdrawalsUseCase;
pub use request_withdrawal::{
    RequestWithdrawalInput, RequestWithdrawalOutput, RequestWithdrawalUseCase,
};
pub use transaction_history::{TransactionHistoryOutput, TransactionHistoryUseCase};
