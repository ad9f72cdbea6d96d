//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Open Session
// ============================================================================

/// Open session request
///
/// Sent by the identity gateway after it has verified the caller with the
/// upstream provider. `role` is optional and defaults to member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessionRequest {
    /// Stable subject identifier from the identity provider
    pub subject: String,
    pub full_name: String,
    pub role: Option<String>,
}

/// Open session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessionResponse {
    pub profile: SessionProfile,
    /// True when this call created the account
    pub created: bool,
}

// ============================================================================
// Session Profile
// ============================================================================

/// Authenticated caller profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    pub public_id: String,
    pub full_name: String,
    pub role: String,
    pub status: String,
    /// Account creation time in epoch milliseconds
    pub member_since: i64,
    pub expires_at_ms: i64,
}
