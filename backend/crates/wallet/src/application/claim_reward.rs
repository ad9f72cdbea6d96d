//! Claim Reward Use Case
//!
//! Settles one "watched an ad" claim. The flow gates in this order: account
//! standing, network origin, challenge verification, then the atomic credit
//! with its cap and cadence checks. The repository owns the last step so two
//! racing claims can never both slip under the cap.

use std::net::IpAddr;
use std::sync::Arc;

use kernel::coins::Coins;
use kernel::id::ClaimChallengeId;
use uuid::Uuid;

use accounts::CurrentUser;
use platform::ip_reputation::{self, IpVerdict};

use crate::application::config::WalletConfig;
use crate::domain::repository::{ClaimAttempt, ClaimRepository};
use crate::error::{WalletError, WalletResult};

/// Claim reward input
pub struct ClaimRewardInput {
    /// Challenge being answered, when the client saw a challenge prompt
    pub challenge_id: Option<Uuid>,
    /// Submitted answer for that challenge
    pub answer: Option<i32>,
    /// Client IP for the advisory reputation lookup and the claim row
    pub client_ip: Option<IpAddr>,
}

/// Claim reward output
#[derive(Debug)]
pub struct ClaimRewardOutput {
    /// Reward credited by this claim
    pub amount: Coins,
    /// Balance after the credit
    pub new_balance: Coins,
    /// 1-based ordinal of this claim within the UTC day
    pub today_count: u32,
}

/// Claim reward use case
pub struct ClaimRewardUseCase<C>
where
    C: ClaimRepository,
{
    claim_repo: Arc<C>,
    config: Arc<WalletConfig>,
}

impl<C> ClaimRewardUseCase<C>
where
    C: ClaimRepository,
{
    pub fn new(claim_repo: Arc<C>, config: Arc<WalletConfig>) -> Self {
        Self { claim_repo, config }
    }

    pub async fn execute(
        &self,
        current: &CurrentUser,
        input: ClaimRewardInput,
    ) -> WalletResult<ClaimRewardOutput> {
        if !current.can_transact() {
            return Err(WalletError::AccountBlocked);
        }

        self.check_origin(input.client_ip).await?;

        // Consume before the credit: a submitted challenge is spent even if
        // the claim itself ends up rejected at the cap
        let challenge_passed = match (input.challenge_id, input.answer) {
            (Some(challenge_id), Some(answer)) => {
                self.verify_challenge(current, challenge_id, answer).await?;
                true
            }
            (None, None) => false,
            // Half a submission is not a submission
            _ => return Err(WalletError::ChallengeFailed),
        };

        let attempt = ClaimAttempt {
            user_id: current.user_id,
            reward: self.config.reward_amount,
            daily_cap: self.config.daily_claim_cap,
            challenge_every_n: self.config.challenge_every_n,
            challenge_passed,
            source_ip: input.client_ip.map(|ip| ip.to_string()),
        };

        let receipt = self.claim_repo.apply_claim(&attempt).await?;

        tracing::info!(
            public_id = %current.public_id,
            amount = %attempt.reward,
            today_count = receipt.today_count,
            "Ad reward claimed"
        );

        Ok(ClaimRewardOutput {
            amount: attempt.reward,
            new_balance: receipt.new_balance,
            today_count: receipt.today_count,
        })
    }

    /// Advisory origin check. A flagged verdict rejects the claim; lookup
    /// failures only log, so an unreachable reputation service never stops
    /// legitimate members.
    async fn check_origin(&self, client_ip: Option<IpAddr>) -> WalletResult<()> {
        let Some(ip) = client_ip else {
            return Ok(());
        };

        match ip_reputation::lookup(&self.config.ip_reputation, ip).await {
            Ok(IpVerdict::Flagged { proxy, hosting }) => {
                tracing::warn!(ip = %ip, proxy, hosting, "Claim from flagged network origin");
                Err(WalletError::SuspiciousOrigin)
            }
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "IP reputation lookup failed, allowing claim");
                Ok(())
            }
        }
    }

    /// Single-shot challenge verification. Unknown, foreign, expired, and
    /// wrong answers all collapse into the same error.
    async fn verify_challenge(
        &self,
        current: &CurrentUser,
        challenge_id: Uuid,
        answer: i32,
    ) -> WalletResult<()> {
        let challenge = self
            .claim_repo
            .consume_challenge(ClaimChallengeId::from_uuid(challenge_id), &current.user_id)
            .await?
            .ok_or(WalletError::ChallengeFailed)?;

        if challenge.is_expired() || !challenge.verify(answer) {
            return Err(WalletError::ChallengeFailed);
        }

        Ok(())
    }
}
