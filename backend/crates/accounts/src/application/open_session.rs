//! Open Session Use Case
//!
//! Exchanges a gateway identity assertion for a signed session cookie.
//! Primary authentication happens upstream; this use case only trusts the
//! shared gateway key and finds-or-creates the local account.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::entity::{access_session::AccessSession, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    full_name::FullName, provider_subject::ProviderSubject, user_role::UserRole,
};
use crate::error::{AccountsError, AccountsResult};

/// Re-export ClientFingerprint from platform
pub use platform::client::ClientFingerprint;

/// Open session input
pub struct OpenSessionInput {
    /// Shared gateway key presented by the caller
    pub gateway_key: String,
    /// Provider subject (find-or-create key)
    pub subject: String,
    /// Display name asserted by the gateway
    pub full_name: String,
    /// Optional role code, honored only at account creation
    pub role: Option<String>,
}

/// Open session output
pub struct OpenSessionOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Resolved user (found or created)
    pub user: User,
    /// Whether this call created the account
    pub created: bool,
    /// Session expiration (Unix ms)
    pub expires_at_ms: i64,
}

/// Open session use case
pub struct OpenSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AccountsConfig>,
}

impl<U, S> OpenSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AccountsConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: OpenSessionInput,
        fingerprint: ClientFingerprint,
    ) -> AccountsResult<OpenSessionOutput> {
        // An unconfigured (empty) key must never authenticate anyone
        if self.config.gateway_key.is_empty()
            || !platform::crypto::constant_time_eq(
                input.gateway_key.as_bytes(),
                &self.config.gateway_key,
            )
        {
            return Err(AccountsError::InvalidGatewayKey);
        }

        let subject = ProviderSubject::new(&input.subject)
            .map_err(|e| AccountsError::InvalidIdentity(e.to_string()))?;
        let full_name = FullName::new(&input.full_name)
            .map_err(|e| AccountsError::InvalidIdentity(e.to_string()))?;
        let role = match input.role.as_deref() {
            Some(code) => UserRole::from_code(code)
                .ok_or_else(|| AccountsError::InvalidIdentity(format!("Unknown role: {code}")))?,
            None => UserRole::default(),
        };

        // Find-or-create by provider subject
        let (user, created) = match self.user_repo.find_by_provider_subject(&subject).await? {
            Some(mut user) => {
                user.record_login();
                // The gateway may assert a newer display name at each login
                if user.full_name != full_name {
                    user.set_full_name(full_name);
                }
                self.user_repo.update(&user).await?;
                (user, false)
            }
            None => {
                let mut user = User::new(subject, full_name, role);
                user.record_login();
                self.user_repo.create(&user).await?;
                (user, true)
            }
        };

        // Create session bound to the client fingerprint
        let session = AccessSession::new(
            user.user_id,
            fingerprint.hash_vec(),
            self.config.session_ttl_ms(),
        );

        self.session_repo.create(&session).await?;

        let session_token = self.generate_session_token(&session);

        tracing::info!(
            public_id = %user.public_id,
            session_id = %session.session_id,
            created = created,
            "Session opened"
        );

        Ok(OpenSessionOutput {
            session_token,
            expires_at_ms: session.expires_at_ms,
            user,
            created,
        })
    }

    /// Generate signed session token
    fn generate_session_token(&self, session: &AccessSession) -> String {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let id_bytes = session.session_id.as_bytes();

        // Create HMAC signature over the raw session id
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(id_bytes);
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            platform::crypto::to_base64url(id_bytes),
            platform::crypto::to_base64url(&signature)
        )
    }
}
