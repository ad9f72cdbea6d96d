//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use platform::client::extract_client_ip;

use accounts::application::ModerateUserUseCase;
use accounts::domain::repository::UserRepository;
use accounts::models::user_status::UserStatus;
use accounts::CurrentUser;

use crate::application::config::WalletConfig;
use crate::application::{
    AccountOverviewUseCase, AdminStatsUseCase, AdminUsersUseCase, ClaimRewardInput,
    ClaimRewardUseCase, DecideWithdrawalUseCase, IssueChallengeUseCase, PendingWithdrawalsUseCase,
    RequestWithdrawalInput, RequestWithdrawalUseCase, TransactionHistoryUseCase,
};
use crate::domain::entity::ledger_entry::LedgerEntry;
use crate::domain::repository::{
    AdminReadRepository, AdminUserSummary, AdminWithdrawalSummary, ClaimRepository,
    LedgerRepository, WithdrawalRepository,
};
use crate::domain::value_object::{
    account_level::AccountLevel, withdrawal_status::WithdrawalDecision,
};
use crate::error::{WalletError, WalletResult};
use crate::presentation::dto::{
    AdminStatsResponse, AdminUserDto, AdminUsersResponse, AdminWithdrawalDto, ChallengeResponse,
    ClaimRequest, ClaimResponse, DecisionRequest, HistoryParams, HistoryResponse, LedgerEntryDto,
    OverviewResponse, PendingWithdrawalsResponse, StatusChangeRequest, SuccessResponse,
    UsersParams, WithdrawRequest, WithdrawResponse,
};

/// Shared state for member-facing wallet handlers
#[derive(Clone)]
pub struct WalletAppState<R>
where
    R: LedgerRepository + ClaimRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<WalletConfig>,
}

/// Shared state for admin handlers
///
/// Carries the accounts repository as well: moderation writes go through the
/// accounts domain, not through wallet tables.
#[derive(Clone)]
pub struct AdminAppState<R, U>
where
    R: AdminReadRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub accounts_repo: Arc<U>,
    pub config: Arc<WalletConfig>,
}

// ============================================================================
// Member: Overview & History
// ============================================================================

/// GET /api/wallet/overview
pub async fn account_overview<R>(
    State(state): State<WalletAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> WalletResult<Json<OverviewResponse>>
where
    R: LedgerRepository + ClaimRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        AccountOverviewUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case.execute(&current).await?;

    Ok(Json(OverviewResponse {
        public_id: current.public_id.to_string(),
        full_name: current.full_name.to_string(),
        status: current.status.code().to_string(),
        level: output.account.level().code().to_string(),
        balance: output.account.balance.to_coins_f64(),
        usd_value: format_usd(state.config.usd_value(output.account.balance)),
        total_earned: output.account.total_earned.to_coins_f64(),
        today_claims: output.today.claims,
        today_earned: output.today.earned.to_coins_f64(),
        remaining_claims: output.remaining_claims,
        recent_activity: output.recent_activity.iter().map(entry_dto).collect(),
    }))
}

/// GET /api/wallet/history
pub async fn transaction_history<R>(
    State(state): State<WalletAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Query(params): Query<HistoryParams>,
) -> WalletResult<Json<HistoryResponse>>
where
    R: LedgerRepository + ClaimRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
{
    let use_case = TransactionHistoryUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(&current, params.page.unwrap_or(1))
        .await?;

    Ok(Json(HistoryResponse {
        entries: output.entries.iter().map(entry_dto).collect(),
        page: output.page,
        has_more: output.has_more,
    }))
}

// ============================================================================
// Member: Claims
// ============================================================================

/// GET /api/earn/challenge
pub async fn issue_challenge<R>(
    State(state): State<WalletAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> WalletResult<Json<ChallengeResponse>>
where
    R: LedgerRepository + ClaimRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
{
    let use_case = IssueChallengeUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(&current).await?;

    Ok(Json(ChallengeResponse {
        challenge_id: output.challenge_id.into_uuid(),
        left_operand: output.left_operand,
        right_operand: output.right_operand,
        expires_at_ms: output.expires_at_ms,
    }))
}

/// POST /api/earn/claim
pub async fn claim_reward<R>(
    State(state): State<WalletAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<ClaimRequest>,
) -> WalletResult<Json<ClaimResponse>>
where
    R: LedgerRepository + ClaimRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));

    let use_case = ClaimRewardUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(
            &current,
            ClaimRewardInput {
                challenge_id: req.challenge_id,
                answer: req.answer,
                client_ip,
            },
        )
        .await?;

    Ok(Json(ClaimResponse {
        granted: true,
        amount: output.amount.to_coins_f64(),
        new_balance: output.new_balance.to_coins_f64(),
        today_count: output.today_count,
    }))
}

// ============================================================================
// Member: Withdrawals
// ============================================================================

/// POST /api/withdrawals
pub async fn request_withdrawal<R>(
    State(state): State<WalletAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<WithdrawRequest>,
) -> WalletResult<impl IntoResponse>
where
    R: LedgerRepository + ClaimRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
{
    let use_case = RequestWithdrawalUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(
            &current,
            RequestWithdrawalInput {
                amount_coins: req.amount,
                method: req.method,
                account_details: req.account_details,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WithdrawResponse {
            request_id: output.withdrawal_id.into_uuid(),
            new_balance: output.new_balance.to_coins_f64(),
        }),
    ))
}

// ============================================================================
// Admin: Dashboard
// ============================================================================

/// GET /api/admin/stats
pub async fn admin_stats<R, U>(
    State(state): State<AdminAppState<R, U>>,
) -> WalletResult<Json<AdminStatsResponse>>
where
    R: AdminReadRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AdminStatsUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute().await?;

    Ok(Json(AdminStatsResponse {
        total_circulation: output.aggregates.total_circulation.to_coins_f64(),
        total_earned_all_time: output.aggregates.total_earned_all_time.to_coins_f64(),
        total_ads_watched: output.aggregates.total_ads_watched,
        total_users: output.aggregates.total_users,
        pending_withdrawals: output.aggregates.pending_withdrawals,
        recent_users: output.recent_users.iter().map(admin_user_dto).collect(),
        recent_withdrawals: output
            .recent_withdrawals
            .iter()
            .map(|w| admin_withdrawal_dto(w, &state.config))
            .collect(),
    }))
}

/// GET /api/admin/users
pub async fn admin_users<R, U>(
    State(state): State<AdminAppState<R, U>>,
    Query(params): Query<UsersParams>,
) -> WalletResult<Json<AdminUsersResponse>>
where
    R: AdminReadRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let status = match params.status.as_deref() {
        Some(code) => Some(UserStatus::from_code(code).ok_or_else(|| {
            WalletError::InvalidDetails(format!("Unknown status filter: {code}"))
        })?),
        None => None,
    };

    let use_case = AdminUsersUseCase::new(state.repo.clone());
    let users = use_case.execute(status).await?;

    Ok(Json(AdminUsersResponse {
        users: users.iter().map(admin_user_dto).collect(),
    }))
}

// ============================================================================
// Admin: Moderation
// ============================================================================

/// POST /api/admin/users/{publicId}/status
pub async fn set_user_status<R, U>(
    State(state): State<AdminAppState<R, U>>,
    Path(public_id): Path<String>,
    Json(req): Json<StatusChangeRequest>,
) -> Result<Json<SuccessResponse>, Response>
where
    R: AdminReadRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let status = UserStatus::from_code(&req.status).ok_or_else(|| {
        WalletError::InvalidDetails(format!("Unknown status: {}", req.status)).into_response()
    })?;

    // Moderation is an accounts-domain write; its errors answer as themselves
    let use_case = ModerateUserUseCase::new(state.accounts_repo.clone());
    use_case
        .execute(&public_id, status)
        .await
        .map_err(|e| e.into_response())?;

    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================================
// Admin: Withdrawal Queue
// ============================================================================

/// GET /api/admin/withdrawals/pending
pub async fn pending_withdrawals<R, U>(
    State(state): State<AdminAppState<R, U>>,
) -> WalletResult<Json<PendingWithdrawalsResponse>>
where
    R: AdminReadRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = PendingWithdrawalsUseCase::new(state.repo.clone());
    let pending = use_case.execute().await?;

    Ok(Json(PendingWithdrawalsResponse {
        withdrawals: pending
            .iter()
            .map(|w| admin_withdrawal_dto(w, &state.config))
            .collect(),
    }))
}

/// POST /api/admin/withdrawals/{id}/decision
pub async fn decide_withdrawal<R, U>(
    State(state): State<AdminAppState<R, U>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<DecisionRequest>,
) -> WalletResult<Json<SuccessResponse>>
where
    R: AdminReadRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let decision = WithdrawalDecision::from_code(&req.decision).ok_or_else(|| {
        WalletError::InvalidDetails(format!("Unknown decision: {}", req.decision))
    })?;

    let use_case = DecideWithdrawalUseCase::new(state.repo.clone());
    use_case.execute(&current, id, decision, req.note).await?;

    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Format a USD display value to cents
fn format_usd(value: f64) -> String {
    format!("{:.2}", value)
}

/// Map a ledger entry to its wire form
fn entry_dto(entry: &LedgerEntry) -> LedgerEntryDto {
    LedgerEntryDto {
        id: entry.entry_id.into_uuid(),
        kind: entry.kind.code().to_string(),
        amount: entry.signed_milli() as f64 / 1_000.0,
        status: entry.status.code().to_string(),
        description: entry.description.clone(),
        created_at_ms: entry.created_at.timestamp_millis(),
    }
}

/// Map an admin user summary to its wire form
fn admin_user_dto(summary: &AdminUserSummary) -> AdminUserDto {
    AdminUserDto {
        public_id: summary.public_id.to_string(),
        full_name: summary.full_name.to_string(),
        status: summary.status.code().to_string(),
        level: AccountLevel::from_total_earned(summary.total_earned).code().to_string(),
        balance: summary.balance.to_coins_f64(),
        total_earned: summary.total_earned.to_coins_f64(),
        joined_at_ms: summary.joined_at.timestamp_millis(),
    }
}

/// Map an admin withdrawal summary to its wire form
fn admin_withdrawal_dto(summary: &AdminWithdrawalSummary, config: &WalletConfig) -> AdminWithdrawalDto {
    let request = &summary.request;

    AdminWithdrawalDto {
        request_id: request.withdrawal_id.into_uuid(),
        public_id: summary.public_id.to_string(),
        full_name: summary.full_name.to_string(),
        amount: request.amount.to_coins_f64(),
        usd_value: format_usd(config.usd_value(request.amount)),
        method: request.payment_method.code().to_string(),
        account_details: request.account_details.as_str().to_string(),
        status: request.status.code().to_string(),
        admin_note: request.admin_note.clone(),
        created_at_ms: request.created_at.timestamp_millis(),
        decided_at_ms: request.decided_at.map(|t| t.timestamp_millis()),
    }
}
