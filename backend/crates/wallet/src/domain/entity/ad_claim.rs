//! Ad Claim Entity
//!
//! One row per granted ad reward. The daily cap and the challenge cadence
//! are both counted off this table, so it must gain a row in the same
//! transaction that credits the reward.

use chrono::{DateTime, Utc};
use kernel::coins::Coins;
use kernel::id::AdClaimId;

use accounts::models::user_id::UserId;

/// Ad claim entity
#[derive(Debug, Clone)]
pub struct AdClaim {
    /// Internal UUID identifier
    pub claim_id: AdClaimId,
    /// Claiming user
    pub user_id: UserId,
    /// Reward granted for this claim
    pub reward: Coins,
    /// Client IP at claim time, for abuse review
    pub source_ip: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl AdClaim {
    /// Record a granted claim
    pub fn new(user_id: UserId, reward: Coins, source_ip: Option<String>) -> Self {
        Self {
            claim_id: AdClaimId::new(),
            user_id,
            reward,
            source_ip,
            created_at: Utc::now(),
        }
    }
}
