//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Balance-mutating operations are deliberately coarse: a trait method is one
//! atomic unit (claim, reserve, decide) rather than a sequence of reads and
//! writes the caller composes. Concurrent requests then serialize on the
//! account row instead of racing each other in application code.

use chrono::{DateTime, Utc};
use kernel::coins::Coins;
use kernel::id::{ClaimChallengeId, LedgerEntryId, WithdrawalId};

use accounts::models::full_name::FullName;
use accounts::models::public_id::PublicId;
use accounts::models::user_id::UserId;
use accounts::models::user_status::UserStatus;

use crate::domain::entity::{
    claim_challenge::ClaimChallenge, ledger_entry::LedgerEntry, wallet_account::WalletAccount,
    withdrawal_request::WithdrawalRequest,
};
use crate::domain::value_object::withdrawal_status::WithdrawalDecision;
use crate::error::WalletResult;

// ============================================================================
// Operation Inputs / Outputs
// ============================================================================

/// Everything `apply_claim` needs to settle one claim atomically
#[derive(Debug, Clone)]
pub struct ClaimAttempt {
    /// Claiming user
    pub user_id: UserId,
    /// Reward to credit when the claim is granted
    pub reward: Coins,
    /// Maximum granted claims per UTC day
    pub daily_cap: u32,
    /// Challenge cadence (every Nth claim of the day; 0 disables)
    pub challenge_every_n: u32,
    /// Whether a challenge was already consumed and verified for this claim
    pub challenge_passed: bool,
    /// Client IP recorded on the claim row
    pub source_ip: Option<String>,
}

/// Result of a granted claim
#[derive(Debug, Clone, Copy)]
pub struct ClaimReceipt {
    /// Balance after the credit
    pub new_balance: Coins,
    /// 1-based ordinal of this claim within the UTC day
    pub today_count: u32,
}

/// Today's claim activity for one user
#[derive(Debug, Clone, Copy)]
pub struct DailySummary {
    /// Granted claims so far today
    pub claims: u32,
    /// Coins earned from those claims
    pub earned: Coins,
}

/// Outcome of an admin decision
#[derive(Debug, Clone)]
pub struct DecidedWithdrawal {
    /// The request with its terminal status applied
    pub request: WithdrawalRequest,
    /// Amount credited back on rejection, `None` on approval
    pub refunded: Option<Coins>,
}

// ============================================================================
// Query Records (admin read models)
// ============================================================================

/// One user row on the admin surface, wallet figures joined in
#[derive(Debug, Clone)]
pub struct AdminUserSummary {
    pub public_id: PublicId,
    pub full_name: FullName,
    pub status: UserStatus,
    pub balance: Coins,
    pub total_earned: Coins,
    pub joined_at: DateTime<Utc>,
}

/// A withdrawal request with the requester's identity joined in
#[derive(Debug, Clone)]
pub struct AdminWithdrawalSummary {
    pub request: WithdrawalRequest,
    pub public_id: PublicId,
    pub full_name: FullName,
}

/// Platform-wide ledger aggregates for the admin dashboard
#[derive(Debug, Clone, Copy)]
pub struct LedgerAggregates {
    /// Sum of all current balances
    pub total_circulation: Coins,
    /// Sum of all lifetime earnings
    pub total_earned_all_time: Coins,
    /// Granted ad claims, all users, all time
    pub total_ads_watched: i64,
    /// Registered users
    pub total_users: i64,
    /// Requests still awaiting a decision
    pub pending_withdrawals: i64,
}

// ============================================================================
// Repository Traits
// ============================================================================

/// Ledger repository trait
#[trait_variant::make(LedgerRepository: Send)]
pub trait LocalLedgerRepository {
    /// Fetch the account, or a zeroed default if the user has no row yet.
    /// The default is not persisted; rows appear on the first mutation.
    async fn fetch_account(&self, user_id: &UserId) -> WalletResult<WalletAccount>;

    /// Apply an earning credit (balance and lifetime earnings rise together)
    /// and record the matching entry
    async fn credit(
        &self,
        user_id: &UserId,
        amount: Coins,
        description: &str,
    ) -> WalletResult<LedgerEntryId>;

    /// Apply a guarded debit and record the matching entry. Fails with
    /// `InsufficientFunds` when the balance does not cover the amount.
    async fn debit(
        &self,
        user_id: &UserId,
        amount: Coins,
        description: &str,
    ) -> WalletResult<LedgerEntryId>;

    /// Latest entries, newest first
    async fn recent_entries(&self, user_id: &UserId, limit: i64) -> WalletResult<Vec<LedgerEntry>>;

    /// One page of entries, newest first
    async fn list_entries(
        &self,
        user_id: &UserId,
        offset: i64,
        limit: i64,
    ) -> WalletResult<Vec<LedgerEntry>>;
}

/// Ad claim repository trait
#[trait_variant::make(ClaimRepository: Send)]
pub trait LocalClaimRepository {
    /// Count and sum today's granted claims (UTC day)
    async fn today_summary(&self, user_id: &UserId) -> WalletResult<DailySummary>;

    /// Settle one claim atomically: cap check, challenge-slot check, credit,
    /// ledger entry, and claim row all inside a single transaction.
    ///
    /// Fails with `RateLimited` at the cap and `ChallengeRequired` on a
    /// gated slot without a verified challenge.
    async fn apply_claim(&self, attempt: &ClaimAttempt) -> WalletResult<ClaimReceipt>;

    /// Store an issued challenge
    async fn store_challenge(&self, challenge: &ClaimChallenge) -> WalletResult<()>;

    /// Consume a challenge in one shot (delete-and-return). `None` when the
    /// challenge does not exist, was already consumed, or belongs to another
    /// user.
    async fn consume_challenge(
        &self,
        challenge_id: ClaimChallengeId,
        user_id: &UserId,
    ) -> WalletResult<Option<ClaimChallenge>>;

    /// Purge expired challenges
    async fn cleanup_expired(&self) -> WalletResult<u64>;
}

/// Withdrawal repository trait
#[trait_variant::make(WithdrawalRepository: Send)]
pub trait LocalWithdrawalRepository {
    /// Reserve funds and file the request atomically: guarded debit, pending
    /// ledger entry, and request row in a single transaction. Fails with
    /// `InsufficientFunds` without writing anything.
    ///
    /// Returns the balance after the reservation.
    async fn create_request(&self, request: &WithdrawalRequest) -> WalletResult<Coins>;

    /// Apply an admin decision exactly once. Rejection credits the refund
    /// and appends its entry in the same transaction; the linked pending
    /// entry moves to its terminal status either way.
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadyDecided` when a
    /// decision already landed.
    async fn decide_request(
        &self,
        withdrawal_id: WithdrawalId,
        decision: WithdrawalDecision,
        note: Option<&str>,
    ) -> WalletResult<DecidedWithdrawal>;
}

/// Admin read repository trait
#[trait_variant::make(AdminReadRepository: Send)]
pub trait LocalAdminReadRepository {
    /// Platform-wide totals
    async fn aggregate_stats(&self) -> WalletResult<LedgerAggregates>;

    /// Latest registrations, newest first
    async fn recent_users(&self, limit: i64) -> WalletResult<Vec<AdminUserSummary>>;

    /// Latest withdrawal requests regardless of status, newest first
    async fn recent_withdrawals(&self, limit: i64) -> WalletResult<Vec<AdminWithdrawalSummary>>;

    /// All users, newest first, optionally filtered by standing
    async fn list_users(&self, status: Option<UserStatus>) -> WalletResult<Vec<AdminUserSummary>>;

    /// Requests awaiting a decision, oldest first (decision queue order)
    async fn pending_withdrawals(&self) -> WalletResult<Vec<AdminWithdrawalSummary>>;
}
