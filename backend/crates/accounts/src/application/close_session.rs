//! Close Session Use Case
//!
//! Deletes the server side session. Idempotent: an unknown or already
//! deleted session id is not an error.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::AccountsConfig;
use crate::domain::repository::SessionRepository;
use crate::error::{AccountsError, AccountsResult};

/// Close session use case
pub struct CloseSessionUseCase<S: SessionRepository> {
    session_repo: Arc<S>,
    config: Arc<AccountsConfig>,
}

impl<S: SessionRepository> CloseSessionUseCase<S> {
    pub fn new(session_repo: Arc<S>, config: Arc<AccountsConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session named by the token
    pub async fn execute(&self, session_token: &str) -> AccountsResult<()> {
        let session_id = self.parse_session_token(session_token)?;

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "Session closed");

        Ok(())
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
