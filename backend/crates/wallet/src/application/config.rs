//! Application Configuration
//!
//! Reward policy knobs for the wallet application layer. Every figure here
//! is a deliberate product decision; the defaults match production.

use kernel::coins::Coins;
use std::time::Duration;

/// Re-export the IP reputation config from platform
pub use platform::ip_reputation::IpReputationConfig;

/// Wallet application configuration
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Coins granted per ad claim
    pub reward_amount: Coins,
    /// Granted claims allowed per user per UTC day
    pub daily_claim_cap: u32,
    /// Every Nth claim of the day requires a challenge (0 disables)
    pub challenge_every_n: u32,
    /// How long an issued challenge stays answerable
    pub challenge_ttl: Duration,
    /// Smallest withdrawal a member may request
    pub min_withdrawal: Coins,
    /// Display conversion rate (coins per USD)
    pub coins_per_usd: i64,
    /// Entries shown in the overview's recent activity strip
    pub recent_activity_limit: i64,
    /// Entries per transaction history page
    pub history_page_size: i64,
    /// Advisory IP reputation lookup for claims
    pub ip_reputation: IpReputationConfig,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            reward_amount: Coins::from_whole(10),
            daily_claim_cap: 50,
            challenge_every_n: 10,
            challenge_ttl: Duration::from_secs(2 * 60),
            min_withdrawal: Coins::from_whole(5_000),
            coins_per_usd: 1_000,
            recent_activity_limit: 5,
            history_page_size: 15,
            // Off unless the binary switches it on; claims must keep working
            // when the lookup endpoint is unreachable anyway
            ip_reputation: IpReputationConfig::disabled(),
        }
    }
}

impl WalletConfig {
    /// Get challenge TTL in milliseconds
    pub fn challenge_ttl_ms(&self) -> i64 {
        self.challenge_ttl.as_millis() as i64
    }

    /// Display value of an amount in USD at the configured rate
    pub fn usd_value(&self, amount: Coins) -> f64 {
        amount.to_coins_f64() / self.coins_per_usd as f64
    }

    /// Minimum withdrawal in whole coins (for error messages)
    pub fn min_withdrawal_coins(&self) -> i64 {
        self.min_withdrawal.whole()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = WalletConfig::default();
        assert_eq!(config.reward_amount, Coins::from_whole(10));
        assert_eq!(config.daily_claim_cap, 50);
        assert_eq!(config.challenge_every_n, 10);
        assert_eq!(config.challenge_ttl_ms(), 120_000);
        assert_eq!(config.min_withdrawal_coins(), 5_000);
        assert!(!config.ip_reputation.enabled);
    }

    #[test]
    fn test_usd_display_rate() {
        let config = WalletConfig::default();
        assert_eq!(config.usd_value(Coins::from_whole(5_000)), 5.0);
        assert_eq!(config.usd_value(Coins::from_whole(10)), 0.01);
        assert_eq!(config.usd_value(Coins::ZERO), 0.0);
    }
}
