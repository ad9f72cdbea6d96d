//! Coin Amounts
//!
//! Fixed-point representation of the platform currency. One coin is 1000
//! milli-coins; every stored amount is an integer number of milli-coins, so
//! ledger arithmetic never touches floating point. Floats exist only at the
//! JSON boundary and are converted through [`Coins::from_coins_f64`] /
//! [`Coins::to_coins_f64`].
//!
//! Amounts are always non-negative. Direction (credit vs debit) is carried
//! by the operation, not by the sign of the amount.

use std::fmt;

use crate::error::app_error::{AppError, AppResult};

/// Milli-coins per coin.
pub const MILLI_PER_COIN: i64 = 1_000;

/// Upper bound accepted from external input (1e12 coins). Keeps any sum of
/// request-sized amounts far away from i64 overflow.
const MAX_INPUT_COINS: f64 = 1_000_000_000_000.0;

/// A non-negative amount of coins, stored as integer milli-coins.
///
/// ## Examples
/// ```rust
/// use kernel::coins::Coins;
///
/// let reward = Coins::from_whole(10);
/// assert_eq!(reward.milli(), 10_000);
///
/// let tiny = Coins::from_coins_f64(0.005).unwrap();
/// assert_eq!(tiny.milli(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coins(i64);

impl Coins {
    /// Zero coins.
    pub const ZERO: Coins = Coins(0);

    /// Create from whole coins.
    #[inline]
    pub const fn from_whole(coins: u32) -> Self {
        Coins(coins as i64 * MILLI_PER_COIN)
    }

    /// Create from milli-coins. Fails on negative input.
    #[inline]
    pub fn from_milli(milli: i64) -> AppResult<Self> {
        if milli < 0 {
            return Err(AppError::bad_request("Amount cannot be negative"));
        }
        Ok(Coins(milli))
    }

    /// Create from a floating-point coin amount (JSON boundary only).
    ///
    /// Rounds to the nearest milli-coin. Rejects NaN, infinities, negative
    /// amounts and absurdly large values.
    pub fn from_coins_f64(coins: f64) -> AppResult<Self> {
        if !coins.is_finite() {
            return Err(AppError::bad_request("Amount must be a finite number"));
        }
        if coins < 0.0 {
            return Err(AppError::bad_request("Amount cannot be negative"));
        }
        if coins > MAX_INPUT_COINS {
            return Err(AppError::bad_request("Amount is out of range"));
        }
        Ok(Coins((coins * MILLI_PER_COIN as f64).round() as i64))
    }

    /// Underlying milli-coin count.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Whole-coin part (truncated).
    #[inline]
    pub const fn whole(&self) -> i64 {
        self.0 / MILLI_PER_COIN
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Floating-point coin value for display DTOs.
    #[inline]
    pub fn to_coins_f64(&self) -> f64 {
        self.0 as f64 / MILLI_PER_COIN as f64
    }

    /// Checked addition; `None` on i64 overflow.
    #[inline]
    pub fn checked_add(self, other: Coins) -> Option<Coins> {
        self.0.checked_add(other.0).map(Coins)
    }

    /// Checked subtraction; `None` when `other` exceeds `self`.
    ///
    /// A `None` here is the arithmetic face of `InsufficientFunds`.
    #[inline]
    pub fn checked_sub(self, other: Coins) -> Option<Coins> {
        if other.0 > self.0 {
            return None;
        }
        Some(Coins(self.0 - other.0))
    }
}

impl fmt::Display for Coins {
    /// Renders whole coins without a fraction ("5000") and fractional
    /// amounts with trailing zeros trimmed ("0.005", "12.5").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / MILLI_PER_COIN;
        let frac = self.0 % MILLI_PER_COIN;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let text = format!("{}.{:03}", whole, frac);
            write!(f, "{}", text.trim_end_matches('0'))
        }
    }
}
