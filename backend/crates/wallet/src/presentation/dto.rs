//! Data Transfer Objects
//!
//! Wire types for the wallet and admin surfaces. Amounts cross the boundary
//! as JSON numbers in whole coins (floats); everything internal stays in
//! integer milli-coins.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Request DTOs
// ============================================================================

/// POST /api/earn/claim request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    /// Challenge being answered, when the client was prompted
    pub challenge_id: Option<Uuid>,
    /// Submitted answer for that challenge
    pub answer: Option<i32>,
}

/// POST /api/withdrawals request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    /// Requested amount in whole coins
    pub amount: f64,
    /// Payout channel code ("easypaisa", "jazzcash", "binance")
    pub method: String,
    /// Payout destination (phone number, pay ID)
    pub account_details: String,
}

/// POST /api/admin/withdrawals/{id}/decision request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    /// "approved" or "rejected"
    pub decision: String,
    /// Optional note shown to the member
    pub note: Option<String>,
}

/// POST /api/admin/users/{publicId}/status request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    /// "active" or "blocked"
    pub status: String,
}

/// GET /api/wallet/history query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    /// 1-based page, defaults to the first
    pub page: Option<u32>,
}

/// GET /api/admin/users query parameters
#[derive(Debug, Deserialize)]
pub struct UsersParams {
    /// Standing filter ("active" / "blocked"), all users when absent
    pub status: Option<String>,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// One ledger entry as the member sees it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryDto {
    pub id: Uuid,
    /// "earning" or "withdrawal"
    pub kind: String,
    /// Signed whole-coin amount (earnings +, withdrawals -)
    pub amount: f64,
    pub status: String,
    pub description: String,
    pub created_at_ms: i64,
}

/// GET /api/wallet/overview response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub public_id: String,
    pub full_name: String,
    pub status: String,
    pub level: String,
    /// Spendable balance in whole coins
    pub balance: f64,
    /// Balance at the display conversion rate, formatted to cents
    pub usd_value: String,
    /// Lifetime earnings in whole coins
    pub total_earned: f64,
    pub today_claims: u32,
    pub today_earned: f64,
    pub remaining_claims: u32,
    pub recent_activity: Vec<LedgerEntryDto>,
}

/// GET /api/wallet/history response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub entries: Vec<LedgerEntryDto>,
    pub page: u32,
    pub has_more: bool,
}

/// GET /api/earn/challenge response (never includes the answer)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    pub challenge_id: Uuid,
    pub left_operand: i32,
    pub right_operand: i32,
    pub expires_at_ms: i64,
}

/// POST /api/earn/claim response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub granted: bool,
    /// Reward credited, in whole coins
    pub amount: f64,
    pub new_balance: f64,
    /// 1-based ordinal of this claim within the UTC day
    pub today_count: u32,
}

/// POST /api/withdrawals response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    pub request_id: Uuid,
    pub new_balance: f64,
}

/// One user row on the admin surface
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    pub public_id: String,
    pub full_name: String,
    pub status: String,
    pub level: String,
    pub balance: f64,
    pub total_earned: f64,
    pub joined_at_ms: i64,
}

/// One withdrawal request on the admin surface
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminWithdrawalDto {
    pub request_id: Uuid,
    pub public_id: String,
    pub full_name: String,
    /// Requested amount in whole coins
    pub amount: f64,
    /// Amount at the display conversion rate, formatted to cents
    pub usd_value: String,
    pub method: String,
    /// Payout destination, visible to admins only
    pub account_details: String,
    pub status: String,
    pub admin_note: Option<String>,
    pub created_at_ms: i64,
    pub decided_at_ms: Option<i64>,
}

/// GET /api/admin/stats response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    /// Sum of all current balances, in whole coins
    pub total_circulation: f64,
    /// Sum of all lifetime earnings, in whole coins
    pub total_earned_all_time: f64,
    pub total_ads_watched: i64,
    pub total_users: i64,
    pub pending_withdrawals: i64,
    pub recent_users: Vec<AdminUserDto>,
    pub recent_withdrawals: Vec<AdminWithdrawalDto>,
}

/// GET /api/admin/users response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUserDto>,
}

/// GET /api/admin/withdrawals/pending response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingWithdrawalsResponse {
    pub withdrawals: Vec<AdminWithdrawalDto>,
}

/// Acknowledgement for admin mutations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub success: bool,
}
