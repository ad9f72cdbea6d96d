//! Account Level Value Object
//!
//! ## Design Decisions
//! - **Derived, never stored**: the level is a pure function of lifetime
//!   earnings, recomputed on read. There is nothing to migrate when the
//!   thresholds move
//! - Based on `total_earned`, not the current balance, so withdrawing never
//!   demotes anyone

use kernel::coins::Coins;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime earnings (in coins) required for each level
pub const SILVER_THRESHOLD: i64 = 10_000;
pub const GOLD_THRESHOLD: i64 = 50_000;
pub const PLATINUM_THRESHOLD: i64 = 200_000;

/// Member standing tier derived from lifetime earnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum AccountLevel {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl AccountLevel {
    /// Derive the level from lifetime earnings
    pub fn from_total_earned(total_earned: Coins) -> Self {
        let coins = total_earned.whole();
        if coins >= PLATINUM_THRESHOLD {
            Self::Platinum
        } else if coins >= GOLD_THRESHOLD {
            Self::Gold
        } else if coins >= SILVER_THRESHOLD {
            Self::Silver
        } else {
            Self::Bronze
        }
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }
}

impl fmt::Display for AccountLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(whole: i64) -> Coins {
        Coins::from_milli(whole * 1_000).unwrap()
    }

    #[test]
    fn test_new_account_is_bronze() {
        assert_eq!(AccountLevel::from_total_earned(Coins::ZERO), AccountLevel::Bronze);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(AccountLevel::from_total_earned(coins(9_999)), AccountLevel::Bronze);
        assert_eq!(AccountLevel::from_total_earned(coins(10_000)), AccountLevel::Silver);
        assert_eq!(AccountLevel::from_total_earned(coins(49_999)), AccountLevel::Silver);
        assert_eq!(AccountLevel::from_total_earned(coins(50_000)), AccountLevel::Gold);
        assert_eq!(AccountLevel::from_total_earned(coins(199_999)), AccountLevel::Gold);
        assert_eq!(AccountLevel::from_total_earned(coins(200_000)), AccountLevel::Platinum);
    }

    #[test]
    fn test_fractional_coins_do_not_round_up() {
        // 9999.999 coins is still Bronze
        let just_under = Coins::from_milli(9_999_999).unwrap();
        assert_eq!(AccountLevel::from_total_earned(just_under), AccountLevel::Bronze);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(AccountLevel::Bronze < AccountLevel::Silver);
        assert!(AccountLevel::Silver < AccountLevel::Gold);
        assert!(AccountLevel::Gold < AccountLevel::Platinum);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountLevel::Platinum.to_string(), "platinum");
    }
}
