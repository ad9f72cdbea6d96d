//! Moderate User Use Case
//!
//! Admin operation that flips a member's standing between active and
//! blocked. Loaded by public id so the admin surface never handles raw
//! database ids.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{public_id::PublicId, user_status::UserStatus};
use crate::error::{AccountsError, AccountsResult};

/// Moderate user use case
pub struct ModerateUserUseCase<U: UserRepository> {
    user_repo: Arc<U>,
}

impl<U: UserRepository> ModerateUserUseCase<U> {
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Set a member's standing, returning the updated user
    ///
    /// A malformed public id maps to the same not-found error as an unknown
    /// one, so the endpoint does not leak which ids exist.
    pub async fn execute(&self, public_id: &str, status: UserStatus) -> AccountsResult<User> {
        let public_id =
            PublicId::parse_str(public_id).map_err(|_| AccountsError::UserNotFound)?;

        let mut user = self
            .user_repo
            .find_by_public_id(&public_id)
            .await?
            .ok_or(AccountsError::UserNotFound)?;

        if user.user_status != status {
            user.set_status(status);
            self.user_repo.update(&user).await?;
        }

        tracing::info!(
            public_id = %user.public_id,
            status = %user.user_status,
            "User standing changed"
        );

        Ok(user)
    }
}
