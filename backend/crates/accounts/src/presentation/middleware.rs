//! Access Guard Middleware
//!
//! Request guards for routes that need an authenticated caller. The guard
//! re-reads the user row on every pass, so role changes and blocks apply to
//! live sessions without waiting for re-login.

use axum::body::Body;
use axum::http::{Extensions, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::client::{extract_client_ip, extract_fingerprint};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::check_session::CurrentUser;
use crate::application::config::AccountsConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AccountsError;

/// Guard state
#[derive(Clone)]
pub struct GuardState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
}

/// Middleware that requires a valid session
///
/// On success the resolved [`CurrentUser`] is stored in request extensions
/// for downstream handlers.
pub async fn require_session<R>(
    state: GuardState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let current = resolve_current_user(&state, req.headers(), req.extensions()).await?;

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

/// Middleware that requires a valid session with the admin role
pub async fn require_admin<R>(
    state: GuardState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let current = resolve_current_user(&state, req.headers(), req.extensions()).await?;

    if !current.is_admin() {
        return Err(AccountsError::AdminRequired.into_response());
    }

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

async fn resolve_current_user<R>(
    state: &GuardState<R>,
    headers: &HeaderMap,
    extensions: &Extensions,
) -> Result<CurrentUser, Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extensions
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());

    let client_ip = extract_client_ip(headers, client_ip);

    let fingerprint = match extract_fingerprint(headers, client_ip) {
        Ok(fp) => fp,
        Err(e) => return Err(AccountsError::from(e).into_response()),
    };

    let token = extract_session_token(headers, &state.config.cookie.name)
        .ok_or_else(|| AccountsError::SessionInvalid.into_response())?;

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    use_case
        .execute(&token, &fingerprint.hash)
        .await
        .map_err(|e| e.into_response())
}

/// Session token from the cookie, falling back to an Authorization bearer
fn extract_session_token(
    headers: &axum::http::HeaderMap,
    cookie_name: &str,
) -> Option<String> {
    if let Some(token) = platform::cookie::extract_cookie(headers, cookie_name) {
        return Some(token);
    }

    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_string())
}
