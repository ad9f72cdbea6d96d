//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::client::{extract_client_ip, extract_fingerprint};

use crate::application::config::AccountsConfig;
use crate::application::{
    CheckSessionUseCase, CloseSessionUseCase, CurrentUser, OpenSessionInput, OpenSessionUseCase,
};
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AccountsError, AccountsResult};
use crate::presentation::dto::{OpenSessionRequest, OpenSessionResponse, SessionProfile};

/// Header carrying the shared identity gateway key
pub const GATEWAY_KEY_HEADER: &str = "x-gateway-key";

/// Shared state for session handlers
#[derive(Clone)]
pub struct AccountsAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
}

// ============================================================================
// Open Session
// ============================================================================

/// POST /api/session
pub async fn open_session<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<OpenSessionRequest>,
) -> AccountsResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    // A missing key gets the same answer as a wrong one
    let gateway_key = headers
        .get(GATEWAY_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AccountsError::InvalidGatewayKey)?
        .to_string();

    let use_case =
        OpenSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = OpenSessionInput {
        gateway_key,
        subject: req.subject,
        full_name: req.full_name,
        role: req.role,
    };

    let output = use_case.execute(input, fingerprint).await?;

    let cookie = state.config.cookie.build_set_cookie(&output.session_token);

    let status = if output.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        [(header::SET_COOKIE, cookie)],
        Json(OpenSessionResponse {
            profile: profile_from_user(&output.user, output.expires_at_ms),
            created: output.created,
        }),
    ))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/session
pub async fn session_status<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
) -> AccountsResult<Json<SessionProfile>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    let token = extract_session_token(&headers, &state.config.cookie.name)
        .ok_or(AccountsError::SessionInvalid)?;

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let current = use_case.execute(&token, &fingerprint.hash).await?;

    Ok(Json(profile_from_current(&current)))
}

// ============================================================================
// Close Session
// ============================================================================

/// DELETE /api/session
pub async fn close_session<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
) -> AccountsResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_token(&headers, &state.config.cookie.name);

    if let Some(token) = token {
        let use_case = CloseSessionUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.cookie.build_delete_cookie();

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Session token from the cookie, falling back to an Authorization bearer
fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(token) = platform::cookie::extract_cookie(headers, cookie_name) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_string())
}

fn profile_from_user(user: &User, expires_at_ms: i64) -> SessionProfile {
    SessionProfile {
        public_id: user.public_id.as_str().to_string(),
        full_name: user.full_name.as_str().to_string(),
        role: user.user_role.code().to_string(),
        status: user.user_status.code().to_string(),
        member_since: user.created_at.timestamp_millis(),
        expires_at_ms,
    }
}

fn profile_from_current(current: &CurrentUser) -> SessionProfile {
    SessionProfile {
        public_id: current.public_id.as_str().to_string(),
        full_name: current.full_name.as_str().to_string(),
        role: current.role.code().to_string(),
        status: current.status.code().to_string(),
        member_since: current.member_since.timestamp_millis(),
        expires_at_ms: current.expires_at_ms,
    }
}
