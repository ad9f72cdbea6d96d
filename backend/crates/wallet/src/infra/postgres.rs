//! PostgreSQL Repository Implementations
//!
//! Every balance mutation runs inside one transaction with the account row
//! locked (or guarded by a conditional UPDATE), so the CHECK constraint on
//! the balance column is a backstop rather than the first line of defense.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use kernel::coins::Coins;
use kernel::id::{ClaimChallengeId, LedgerEntryId, WithdrawalId};
use platform::rate_limit::DailyQuota;

use accounts::models::full_name::FullName;
use accounts::models::public_id::PublicId;
use accounts::models::user_id::UserId;
use accounts::models::user_status::UserStatus;

use crate::domain::entity::ad_claim::AdClaim;
use crate::domain::entity::claim_challenge::ClaimChallenge;
use crate::domain::entity::ledger_entry::{LedgerEntry, AD_REWARD_DESCRIPTION};
use crate::domain::entity::wallet_account::WalletAccount;
use crate::domain::entity::withdrawal_request::WithdrawalRequest;
use crate::domain::repository::{
    AdminReadRepository, AdminUserSummary, AdminWithdrawalSummary, ClaimAttempt, ClaimReceipt,
    ClaimRepository, DailySummary, DecidedWithdrawal, LedgerAggregates, LedgerRepository,
    WithdrawalRepository,
};
use crate::domain::services;
use crate::domain::value_object::{
    account_details::AccountDetails, entry_status::EntryStatus, payment_method::PaymentMethod,
    transaction_kind::TransactionKind, withdrawal_status::WithdrawalDecision,
    withdrawal_status::WithdrawalStatus,
};
use crate::error::{WalletError, WalletResult};

/// PostgreSQL-backed wallet repository
#[derive(Clone)]
pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Purge expired claim challenges
    pub async fn cleanup_expired(&self) -> WalletResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM claim_challenges WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(challenges_deleted = deleted, "Cleaned up expired claim challenges");

        Ok(deleted)
    }
}

// ============================================================================
// Transaction Helpers
// ============================================================================

/// Create the wallet row on first contact so later statements can rely on it
async fn ensure_account(conn: &mut PgConnection, user_id: &UserId) -> WalletResult<()> {
    sqlx::query(
        r#"
        INSERT INTO wallet_accounts (user_id, balance_milli, total_earned_milli, created_at, updated_at)
        VALUES ($1, 0, 0, $2, $2)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id.as_uuid())
    .bind(Utc::now())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Append one ledger entry
async fn insert_entry(conn: &mut PgConnection, entry: &LedgerEntry) -> WalletResult<()> {
    sqlx::query(
        r#"
        INSERT INTO ledger_entries (
            entry_id,
            user_id,
            kind,
            amount_milli,
            status,
            description,
            withdrawal_id,
            created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(entry.entry_id.as_uuid())
    .bind(entry.user_id.as_uuid())
    .bind(entry.kind.id())
    .bind(entry.amount.milli())
    .bind(entry.status.id())
    .bind(&entry.description)
    .bind(entry.withdrawal_id.map(|id| id.into_uuid()))
    .bind(entry.created_at)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

// ============================================================================
// Ledger Repository Implementation
// ============================================================================

impl LedgerRepository for PgWalletRepository {
    async fn fetch_account(&self, user_id: &UserId) -> WalletResult<WalletAccount> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT user_id, balance_milli, total_earned_milli, created_at, updated_at
            FROM wallet_accounts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_account(),
            // No row until the first mutation; show zeros
            None => Ok(WalletAccount::new(*user_id)),
        }
    }

    async fn credit(
        &self,
        user_id: &UserId,
        amount: Coins,
        description: &str,
    ) -> WalletResult<LedgerEntryId> {
        let mut tx = self.pool.begin().await?;

        ensure_account(&mut *tx, user_id).await?;

        sqlx::query(
            r#"
            UPDATE wallet_accounts
            SET balance_milli = balance_milli + $2,
                total_earned_milli = total_earned_milli + $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(amount.milli())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let entry = LedgerEntry::earning(*user_id, amount, description);
        insert_entry(&mut *tx, &entry).await?;

        tx.commit().await?;

        Ok(entry.entry_id)
    }

    async fn debit(
        &self,
        user_id: &UserId,
        amount: Coins,
        description: &str,
    ) -> WalletResult<LedgerEntryId> {
        let mut tx = self.pool.begin().await?;

        ensure_account(&mut *tx, user_id).await?;

        // Conditional UPDATE; zero rows means the balance fell short
        let updated = sqlx::query(
            r#"
            UPDATE wallet_accounts
            SET balance_milli = balance_milli - $2, updated_at = $3
            WHERE user_id = $1 AND balance_milli >= $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(amount.milli())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(WalletError::InsufficientFunds);
        }

        let entry = LedgerEntry::debit(*user_id, amount, description);
        insert_entry(&mut *tx, &entry).await?;

        tx.commit().await?;

        Ok(entry.entry_id)
    }

    async fn recent_entries(&self, user_id: &UserId, limit: i64) -> WalletResult<Vec<LedgerEntry>> {
        let rows = sqlx::query_as::<_, LedgerEntryRow>(
            r#"
            SELECT entry_id, user_id, kind, amount_milli, status, description, withdrawal_id, created_at
            FROM ledger_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn list_entries(
        &self,
        user_id: &UserId,
        offset: i64,
        limit: i64,
    ) -> WalletResult<Vec<LedgerEntry>> {
        let rows = sqlx::query_as::<_, LedgerEntryRow>(
            r#"
            SELECT entry_id, user_id, kind, amount_milli, status, description, withdrawal_id, created_at
            FROM ledger_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }
}

// ============================================================================
// Claim Repository Implementation
// ============================================================================

impl ClaimRepository for PgWalletRepository {
    async fn today_summary(&self, user_id: &UserId) -> WalletResult<DailySummary> {
        let day_start = services::utc_day_start(Utc::now());

        let (claims, earned_milli) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*), COALESCE(SUM(reward_milli), 0)::BIGINT
            FROM ad_claims
            WHERE user_id = $1 AND created_at >= $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(day_start)
        .fetch_one(&self.pool)
        .await?;

        Ok(DailySummary {
            claims: claims as u32,
            earned: Coins::from_milli(earned_milli)?,
        })
    }

    async fn apply_claim(&self, attempt: &ClaimAttempt) -> WalletResult<ClaimReceipt> {
        let now = Utc::now();
        let day_start = services::utc_day_start(now);

        let mut tx = self.pool.begin().await?;

        ensure_account(&mut *tx, &attempt.user_id).await?;

        // Serialize concurrent claims for this user on the account row
        sqlx::query("SELECT balance_milli FROM wallet_accounts WHERE user_id = $1 FOR UPDATE")
            .bind(attempt.user_id.as_uuid())
            .fetch_one(&mut *tx)
            .await?;

        let used: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM ad_claims WHERE user_id = $1 AND created_at >= $2",
        )
        .bind(attempt.user_id.as_uuid())
        .bind(day_start)
        .fetch_one(&mut *tx)
        .await?;

        let quota = DailyQuota::new(attempt.daily_cap).status(used as u32);
        if quota.exhausted() {
            return Err(WalletError::RateLimited);
        }

        let claim_number = used as u32 + 1;
        if services::is_challenge_slot(claim_number, attempt.challenge_every_n)
            && !attempt.challenge_passed
        {
            return Err(WalletError::ChallengeRequired);
        }

        let new_balance_milli: i64 = sqlx::query_scalar(
            r#"
            UPDATE wallet_accounts
            SET balance_milli = balance_milli + $2,
                total_earned_milli = total_earned_milli + $2,
                updated_at = $3
            WHERE user_id = $1
            RETURNING balance_milli
            "#,
        )
        .bind(attempt.user_id.as_uuid())
        .bind(attempt.reward.milli())
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let entry = LedgerEntry::earning(attempt.user_id, attempt.reward, AD_REWARD_DESCRIPTION);
        insert_entry(&mut *tx, &entry).await?;

        let claim = AdClaim::new(attempt.user_id, attempt.reward, attempt.source_ip.clone());
        sqlx::query(
            r#"
            INSERT INTO ad_claims (claim_id, user_id, reward_milli, source_ip, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(claim.claim_id.as_uuid())
        .bind(claim.user_id.as_uuid())
        .bind(claim.reward.milli())
        .bind(claim.source_ip.as_deref())
        .bind(claim.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ClaimReceipt {
            new_balance: Coins::from_milli(new_balance_milli)?,
            today_count: claim_number,
        })
    }

    async fn store_challenge(&self, challenge: &ClaimChallenge) -> WalletResult<()> {
        sqlx::query(
            r#"
            INSERT INTO claim_challenges (
                challenge_id,
                user_id,
                left_operand,
                right_operand,
                expected_answer,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(challenge.challenge_id.as_uuid())
        .bind(challenge.user_id.as_uuid())
        .bind(challenge.left_operand)
        .bind(challenge.right_operand)
        .bind(challenge.expected_answer)
        .bind(challenge.expires_at_ms)
        .bind(challenge.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn consume_challenge(
        &self,
        challenge_id: ClaimChallengeId,
        user_id: &UserId,
    ) -> WalletResult<Option<ClaimChallenge>> {
        // Delete-and-return keeps consumption single-shot under concurrency
        let row = sqlx::query_as::<_, ChallengeRow>(
            r#"
            DELETE FROM claim_challenges
            WHERE challenge_id = $1 AND user_id = $2
            RETURNING challenge_id, user_id, left_operand, right_operand,
                      expected_answer, expires_at_ms, created_at
            "#,
        )
        .bind(challenge_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_challenge()))
    }

    async fn cleanup_expired(&self) -> WalletResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Withdrawal Repository Implementation
// ============================================================================

impl WithdrawalRepository for PgWalletRepository {
    async fn create_request(&self, request: &WithdrawalRequest) -> WalletResult<Coins> {
        let mut tx = self.pool.begin().await?;

        ensure_account(&mut *tx, &request.user_id).await?;

        // Guarded reservation; no row back means the balance fell short
        let new_balance_milli: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE wallet_accounts
            SET balance_milli = balance_milli - $2, updated_at = $3
            WHERE user_id = $1 AND balance_milli >= $2
            RETURNING balance_milli
            "#,
        )
        .bind(request.user_id.as_uuid())
        .bind(request.amount.milli())
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(new_balance_milli) = new_balance_milli else {
            return Err(WalletError::InsufficientFunds);
        };

        sqlx::query(
            r#"
            INSERT INTO withdrawal_requests (
                withdrawal_id,
                user_id,
                amount_milli,
                payment_method,
                account_details,
                status,
                admin_note,
                created_at,
                decided_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(request.withdrawal_id.as_uuid())
        .bind(request.user_id.as_uuid())
        .bind(request.amount.milli())
        .bind(request.payment_method.id())
        .bind(request.account_details.as_str())
        .bind(request.status.id())
        .bind(request.admin_note.as_deref())
        .bind(request.created_at)
        .bind(request.decided_at)
        .execute(&mut *tx)
        .await?;

        let entry = LedgerEntry::withdrawal(
            request.user_id,
            request.amount,
            request.withdrawal_id,
            format!("Withdrawal via {}", request.payment_method.label()),
        );
        insert_entry(&mut *tx, &entry).await?;

        tx.commit().await?;

        Coins::from_milli(new_balance_milli).map_err(Into::into)
    }

    async fn decide_request(
        &self,
        withdrawal_id: WithdrawalId,
        decision: WithdrawalDecision,
        note: Option<&str>,
    ) -> WalletResult<DecidedWithdrawal> {
        let now = Utc::now();
        let new_status = decision.terminal_status();

        let mut tx = self.pool.begin().await?;

        // Status-guarded transition; of two racing decisions only one sees
        // the Pending row
        let row = sqlx::query_as::<_, WithdrawalRow>(
            r#"
            UPDATE withdrawal_requests
            SET status = $2, admin_note = $3, decided_at = $4
            WHERE withdrawal_id = $1 AND status = $5
            RETURNING withdrawal_id, user_id, amount_milli, payment_method,
                      account_details, status, admin_note, created_at, decided_at
            "#,
        )
        .bind(withdrawal_id.as_uuid())
        .bind(new_status.id())
        .bind(note)
        .bind(now)
        .bind(WithdrawalStatus::Pending.id())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            // Unknown id and already-decided get different answers
            let existing: Option<i16> =
                sqlx::query_scalar("SELECT status FROM withdrawal_requests WHERE withdrawal_id = $1")
                    .bind(withdrawal_id.as_uuid())
                    .fetch_optional(&mut *tx)
                    .await?;

            return Err(match existing {
                Some(_) => WalletError::AlreadyDecided,
                None => WalletError::NotFound,
            });
        };

        let request = row.into_request()?;

        // The pending reservation entry follows the decision
        let entry_status = match decision {
            WithdrawalDecision::Approve => EntryStatus::Completed,
            WithdrawalDecision::Reject => EntryStatus::Rejected,
        };
        sqlx::query(
            r#"
            UPDATE ledger_entries
            SET status = $2
            WHERE withdrawal_id = $1 AND kind = $3 AND status = $4
            "#,
        )
        .bind(withdrawal_id.as_uuid())
        .bind(entry_status.id())
        .bind(TransactionKind::Withdrawal.id())
        .bind(EntryStatus::Pending.id())
        .execute(&mut *tx)
        .await?;

        let refunded = if decision.refunds() {
            sqlx::query(
                r#"
                UPDATE wallet_accounts
                SET balance_milli = balance_milli + $2, updated_at = $3
                WHERE user_id = $1
                "#,
            )
            .bind(request.user_id.as_uuid())
            .bind(request.amount.milli())
            .bind(now)
            .execute(&mut *tx)
            .await?;

            let refund = LedgerEntry::refund(request.user_id, request.amount, withdrawal_id);
            insert_entry(&mut *tx, &refund).await?;

            Some(request.amount)
        } else {
            None
        };

        tx.commit().await?;

        Ok(DecidedWithdrawal { request, refunded })
    }
}

// ============================================================================
// Admin Read Repository Implementation
// ============================================================================

impl AdminReadRepository for PgWalletRepository {
    async fn aggregate_stats(&self) -> WalletResult<LedgerAggregates> {
        let (circulation_milli, earned_milli) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COALESCE(SUM(balance_milli), 0)::BIGINT,
                   COALESCE(SUM(total_earned_milli), 0)::BIGINT
            FROM wallet_accounts
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let total_ads_watched: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ad_claims")
            .fetch_one(&self.pool)
            .await?;

        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        let pending_withdrawals: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM withdrawal_requests WHERE status = $1")
                .bind(WithdrawalStatus::Pending.id())
                .fetch_one(&self.pool)
                .await?;

        Ok(LedgerAggregates {
            total_circulation: Coins::from_milli(circulation_milli)?,
            total_earned_all_time: Coins::from_milli(earned_milli)?,
            total_ads_watched,
            total_users,
            pending_withdrawals,
        })
    }

    async fn recent_users(&self, limit: i64) -> WalletResult<Vec<AdminUserSummary>> {
        let rows = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT u.public_id, u.full_name, u.user_status, u.created_at,
                   COALESCE(w.balance_milli, 0) AS balance_milli,
                   COALESCE(w.total_earned_milli, 0) AS total_earned_milli
            FROM users u
            LEFT JOIN wallet_accounts w ON w.user_id = u.user_id
            ORDER BY u.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_summary()).collect()
    }

    async fn recent_withdrawals(&self, limit: i64) -> WalletResult<Vec<AdminWithdrawalSummary>> {
        let rows = sqlx::query_as::<_, AdminWithdrawalRow>(
            r#"
            SELECT w.withdrawal_id, w.user_id, w.amount_milli, w.payment_method,
                   w.account_details, w.status, w.admin_note, w.created_at, w.decided_at,
                   u.public_id, u.full_name
            FROM withdrawal_requests w
            JOIN users u ON u.user_id = w.user_id
            ORDER BY w.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_summary()).collect()
    }

    async fn list_users(&self, status: Option<UserStatus>) -> WalletResult<Vec<AdminUserSummary>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, AdminUserRow>(
                    r#"
                    SELECT u.public_id, u.full_name, u.user_status, u.created_at,
                           COALESCE(w.balance_milli, 0) AS balance_milli,
                           COALESCE(w.total_earned_milli, 0) AS total_earned_milli
                    FROM users u
                    LEFT JOIN wallet_accounts w ON w.user_id = u.user_id
                    WHERE u.user_status = $1
                    ORDER BY u.created_at DESC
                    "#,
                )
                .bind(status.id())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, AdminUserRow>(
                    r#"
                    SELECT u.public_id, u.full_name, u.user_status, u.created_at,
                           COALESCE(w.balance_milli, 0) AS balance_milli,
                           COALESCE(w.total_earned_milli, 0) AS total_earned_milli
                    FROM users u
                    LEFT JOIN wallet_accounts w ON w.user_id = u.user_id
                    ORDER BY u.created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(|r| r.into_summary()).collect()
    }

    async fn pending_withdrawals(&self) -> WalletResult<Vec<AdminWithdrawalSummary>> {
        let rows = sqlx::query_as::<_, AdminWithdrawalRow>(
            r#"
            SELECT w.withdrawal_id, w.user_id, w.amount_milli, w.payment_method,
                   w.account_details, w.status, w.admin_note, w.created_at, w.decided_at,
                   u.public_id, u.full_name
            FROM withdrawal_requests w
            JOIN users u ON u.user_id = w.user_id
            WHERE w.status = $1
            ORDER BY w.created_at ASC
            "#,
        )
        .bind(WithdrawalStatus::Pending.id())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_summary()).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    user_id: Uuid,
    balance_milli: i64,
    total_earned_milli: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> WalletResult<WalletAccount> {
        Ok(WalletAccount {
            user_id: UserId::from_uuid(self.user_id),
            balance: Coins::from_milli(self.balance_milli)?,
            total_earned: Coins::from_milli(self.total_earned_milli)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LedgerEntryRow {
    entry_id: Uuid,
    user_id: Uuid,
    kind: i16,
    amount_milli: i64,
    status: i16,
    description: String,
    withdrawal_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl LedgerEntryRow {
    fn into_entry(self) -> WalletResult<LedgerEntry> {
        let kind = TransactionKind::from_id(self.kind)
            .ok_or_else(|| WalletError::Internal(format!("Invalid transaction kind: {}", self.kind)))?;

        Ok(LedgerEntry {
            entry_id: LedgerEntryId::from_uuid(self.entry_id),
            user_id: UserId::from_uuid(self.user_id),
            kind,
            amount: Coins::from_milli(self.amount_milli)?,
            status: EntryStatus::from_id(self.status).unwrap_or_default(),
            description: self.description,
            withdrawal_id: self.withdrawal_id.map(WithdrawalId::from_uuid),
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ChallengeRow {
    challenge_id: Uuid,
    user_id: Uuid,
    left_operand: i32,
    right_operand: i32,
    expected_answer: i32,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl ChallengeRow {
    fn into_challenge(self) -> ClaimChallenge {
        ClaimChallenge {
            challenge_id: ClaimChallengeId::from_uuid(self.challenge_id),
            user_id: UserId::from_uuid(self.user_id),
            left_operand: self.left_operand,
            right_operand: self.right_operand,
            expected_answer: self.expected_answer,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct WithdrawalRow {
    withdrawal_id: Uuid,
    user_id: Uuid,
    amount_milli: i64,
    payment_method: i16,
    account_details: String,
    status: i16,
    admin_note: Option<String>,
    created_at: DateTime<Utc>,
    decided_at: Option<DateTime<Utc>>,
}

impl WithdrawalRow {
    fn into_request(self) -> WalletResult<WithdrawalRequest> {
        let payment_method = PaymentMethod::from_id(self.payment_method).ok_or_else(|| {
            WalletError::Internal(format!("Invalid payment method: {}", self.payment_method))
        })?;
        let status = WithdrawalStatus::from_id(self.status)
            .ok_or_else(|| WalletError::Internal(format!("Invalid withdrawal status: {}", self.status)))?;

        Ok(WithdrawalRequest {
            withdrawal_id: WithdrawalId::from_uuid(self.withdrawal_id),
            user_id: UserId::from_uuid(self.user_id),
            amount: Coins::from_milli(self.amount_milli)?,
            payment_method,
            account_details: AccountDetails::from_db(&self.account_details),
            status,
            admin_note: self.admin_note,
            created_at: self.created_at,
            decided_at: self.decided_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    public_id: String,
    full_name: String,
    user_status: i16,
    created_at: DateTime<Utc>,
    balance_milli: i64,
    total_earned_milli: i64,
}

impl AdminUserRow {
    fn into_summary(self) -> WalletResult<AdminUserSummary> {
        let public_id = PublicId::parse_str(&self.public_id)
            .map_err(|e| WalletError::Internal(format!("Invalid public_id: {}", e)))?;

        Ok(AdminUserSummary {
            public_id,
            full_name: FullName::from_db(&self.full_name),
            status: UserStatus::from_id(self.user_status).unwrap_or_default(),
            balance: Coins::from_milli(self.balance_milli)?,
            total_earned: Coins::from_milli(self.total_earned_milli)?,
            joined_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdminWithdrawalRow {
    withdrawal_id: Uuid,
    user_id: Uuid,
    amount_milli: i64,
    payment_method: i16,
    account_details: String,
    status: i16,
    admin_note: Option<String>,
    created_at: DateTime<Utc>,
    decided_at: Option<DateTime<Utc>>,
    public_id: String,
    full_name: String,
}

impl AdminWithdrawalRow {
    fn into_summary(self) -> WalletResult<AdminWithdrawalSummary> {
        let public_id = PublicId::parse_str(&self.public_id)
            .map_err(|e| WalletError::Internal(format!("Invalid public_id: {}", e)))?;
        let full_name = FullName::from_db(&self.full_name);

        let request = WithdrawalRow {
            withdrawal_id: self.withdrawal_id,
            user_id: self.user_id,
            amount_milli: self.amount_milli,
            payment_method: self.payment_method,
            account_details: self.account_details,
            status: self.status,
            admin_note: self.admin_note,
            created_at: self.created_at,
            decided_at: self.decided_at,
        }
        .into_request()?;

        Ok(AdminWithdrawalSummary {
            request,
            public_id,
            full_name,
        })
    }
}
