//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{access_session::AccessSession, user::User};
use crate::domain::value_object::{
    provider_subject::ProviderSubject, public_id::PublicId, user_id::UserId,
};
use crate::error::AccountsResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AccountsResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>>;

    /// Find user by public ID
    async fn find_by_public_id(&self, public_id: &PublicId) -> AccountsResult<Option<User>>;

    /// Find user by provider subject (find-or-create key)
    async fn find_by_provider_subject(
        &self,
        subject: &ProviderSubject,
    ) -> AccountsResult<Option<User>>;

    /// Update user
    async fn update(&self, user: &User) -> AccountsResult<()>;
}

/// Access session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AccessSession) -> AccountsResult<()>;

    /// Find a live session by ID and verify fingerprint
    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AccountsResult<Option<AccessSession>>;

    /// Update session (last seen)
    async fn update(&self, session: &AccessSession) -> AccountsResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AccountsResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AccountsResult<u64>;
}
