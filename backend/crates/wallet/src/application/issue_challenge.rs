//! Issue Challenge Use Case
//!
//! Hands out a fresh arithmetic challenge ahead of a gated claim. The
//! operands go to the client; the expected answer stays server-side until
//! the claim consumes the challenge.

use std::sync::Arc;

use kernel::id::ClaimChallengeId;

use accounts::CurrentUser;

use crate::application::config::WalletConfig;
use crate::domain::entity::claim_challenge::ClaimChallenge;
use crate::domain::repository::ClaimRepository;
use crate::domain::services;
use crate::error::{WalletError, WalletResult};

/// Issue challenge output (no expected answer here on purpose)
#[derive(Debug)]
pub struct IssueChallengeOutput {
    pub challenge_id: ClaimChallengeId,
    pub left_operand: i32,
    pub right_operand: i32,
    pub expires_at_ms: i64,
}

/// Issue challenge use case
pub struct IssueChallengeUseCase<C>
where
    C: ClaimRepository,
{
    claim_repo: Arc<C>,
    config: Arc<WalletConfig>,
}

impl<C> IssueChallengeUseCase<C>
where
    C: ClaimRepository,
{
    pub fn new(claim_repo: Arc<C>, config: Arc<WalletConfig>) -> Self {
        Self { claim_repo, config }
    }

    pub async fn execute(&self, current: &CurrentUser) -> WalletResult<IssueChallengeOutput> {
        if !current.can_transact() {
            return Err(WalletError::AccountBlocked);
        }

        let (left, right) = services::generate_operands();
        let challenge = ClaimChallenge::new(current.user_id, left, right, self.config.challenge_ttl);

        self.claim_repo.store_challenge(&challenge).await?;

        tracing::debug!(
            challenge_id = %challenge.challenge_id,
            public_id = %current.public_id,
            "Claim challenge issued"
        );

        Ok(IssueChallengeOutput {
            challenge_id: challenge.challenge_id,
            left_operand: challenge.left_operand,
            right_operand: challenge.right_operand,
            expires_at_ms: challenge.expires_at_ms,
        })
    }
}
