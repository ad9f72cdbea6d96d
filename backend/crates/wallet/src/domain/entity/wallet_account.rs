//! Wallet Account Entity
//!
//! One row per user, created lazily on the first claim or withdrawal. Holds
//! the spendable balance and the lifetime earnings counter the level tiers
//! are derived from.

use chrono::{DateTime, Utc};
use kernel::coins::Coins;

use accounts::models::user_id::UserId;

use crate::domain::value_object::account_level::AccountLevel;

/// Wallet account entity
#[derive(Debug, Clone)]
pub struct WalletAccount {
    /// Owning user (one wallet per user)
    pub user_id: UserId,
    /// Spendable balance (never negative)
    pub balance: Coins,
    /// Lifetime earnings; only ad reward credits raise it, refunds do not
    pub total_earned: Coins,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl WalletAccount {
    /// Create a fresh zeroed account
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            balance: Coins::ZERO,
            total_earned: Coins::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Level tier derived from lifetime earnings
    pub fn level(&self) -> AccountLevel {
        AccountLevel::from_total_earned(self.total_earned)
    }

    /// Apply an earning credit. Balance and lifetime earnings rise together.
    ///
    /// Returns `None` on arithmetic overflow.
    pub fn credit_earning(&mut self, amount: Coins) -> Option<()> {
        let balance = self.balance.checked_add(amount)?;
        let total_earned = self.total_earned.checked_add(amount)?;
        self.balance = balance;
        self.total_earned = total_earned;
        self.updated_at = Utc::now();
        Some(())
    }

    /// Return previously reserved funds. Lifetime earnings stay untouched,
    /// so a request/reject cycle cannot inflate the level.
    ///
    /// Returns `None` on arithmetic overflow.
    pub fn credit_refund(&mut self, amount: Coins) -> Option<()> {
        self.balance = self.balance.checked_add(amount)?;
        self.updated_at = Utc::now();
        Some(())
    }

    /// Remove funds from the balance.
    ///
    /// Returns `None` when the balance does not cover the amount; the
    /// account is left unchanged in that case.
    pub fn debit(&mut self, amount: Coins) -> Option<()> {
        self.balance = self.balance.checked_sub(amount)?;
        self.updated_at = Utc::now();
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(whole: u32) -> Coins {
        Coins::from_whole(whole)
    }

    #[test]
    fn test_new_account_is_zeroed() {
        let account = WalletAccount::new(UserId::new());
        assert!(account.balance.is_zero());
        assert!(account.total_earned.is_zero());
        assert_eq!(account.level(), AccountLevel::Bronze);
    }

    #[test]
    fn test_earning_raises_both_counters() {
        let mut account = WalletAccount::new(UserId::new());
        account.credit_earning(coins(10)).unwrap();
        assert_eq!(account.balance, coins(10));
        assert_eq!(account.total_earned, coins(10));
    }

    #[test]
    fn test_refund_raises_balance_only() {
        let mut account = WalletAccount::new(UserId::new());
        account.credit_earning(coins(10_000)).unwrap();
        account.debit(coins(5_000)).unwrap();
        account.credit_refund(coins(5_000)).unwrap();

        assert_eq!(account.balance, coins(10_000));
        // Lifetime earnings unchanged by the round trip
        assert_eq!(account.total_earned, coins(10_000));
        assert_eq!(account.level(), AccountLevel::Silver);
    }

    #[test]
    fn test_debit_beyond_balance_fails_cleanly() {
        let mut account = WalletAccount::new(UserId::new());
        account.credit_earning(coins(10)).unwrap();

        assert!(account.debit(coins(11)).is_none());
        assert_eq!(account.balance, coins(10));
    }
}
