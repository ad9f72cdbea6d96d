//! Check Session Use Case
//!
//! Verifies a session token and resolves the caller's current identity.
//! Role and standing come from the user row, not from any session snapshot,
//! so blocking a user takes effect on their live sessions immediately.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::config::AccountsConfig;
use crate::domain::entity::access_session::AccessSession;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    full_name::FullName, public_id::PublicId, user_id::UserId, user_role::UserRole,
    user_status::UserStatus,
};
use crate::error::{AccountsError, AccountsResult};

/// Resolved caller identity
///
/// Inserted into request extensions by the guard middleware and consumed by
/// downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub public_id: PublicId,
    pub full_name: FullName,
    pub role: UserRole,
    pub status: UserStatus,
    pub session_id: Uuid,
    pub expires_at_ms: i64,
    pub member_since: DateTime<Utc>,
}

impl CurrentUser {
    /// Whether the caller may use the admin surface
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the caller may claim rewards or move funds
    pub fn can_transact(&self) -> bool {
        self.status.can_transact()
    }
}

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AccountsConfig>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AccountsConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Verify the token and resolve the caller
    pub async fn execute(
        &self,
        session_token: &str,
        fingerprint_hash: &[u8],
    ) -> AccountsResult<CurrentUser> {
        let session = self.get_session(session_token, fingerprint_hash).await?;

        let user = match self.user_repo.find_by_id(&session.user_id).await? {
            Some(user) => user,
            None => {
                // Users are never hard-deleted; a dangling session means the
                // row is gone out-of-band. Treat the session as dead.
                tracing::warn!(session_id = %session.session_id, "Session references missing user");
                self.session_repo.delete(session.session_id).await?;
                return Err(AccountsError::SessionInvalid);
            }
        };

        Ok(CurrentUser {
            user_id: user.user_id,
            public_id: user.public_id,
            full_name: user.full_name,
            role: user.user_role,
            status: user.user_status,
            session_id: session.session_id,
            expires_at_ms: session.expires_at_ms,
            member_since: user.created_at,
        })
    }

    /// Get session and update last seen
    pub async fn get_session(
        &self,
        session_token: &str,
        fingerprint_hash: &[u8],
    ) -> AccountsResult<AccessSession> {
        let session_id = self.parse_session_token(session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id, fingerprint_hash)
            .await?
            .ok_or(AccountsError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AccountsError::SessionInvalid);
        }

        // Update last seen (fire and forget)
        let mut session = session;
        session.touch();

        let session_clone = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }

    /// Parse and verify session token
    fn parse_session_token(&self, token: &str) -> AccountsResult<Uuid> {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return Err(AccountsError::SessionInvalid);
        }

        let id_bytes = platform::crypto::from_base64url(parts[0])
            .map_err(|_| AccountsError::SessionInvalid)?;

        // Verify signature
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(&id_bytes);

        let signature = platform::crypto::from_base64url(parts[1])
            .map_err(|_| AccountsError::SessionInvalid)?;

        mac.verify_slice(&signature)
            .map_err(|_| AccountsError::SessionInvalid)?;

        Uuid::from_slice(&id_bytes).map_err(|_| AccountsError::SessionInvalid)
    }
}
