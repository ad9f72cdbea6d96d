//! Account Details Value Object
//!
//! The payout destination a member supplies with a withdrawal request: a
//! phone number for the mobile wallets, a pay ID for Binance. The service
//! stores it opaquely for the admin to read at payout time and makes no
//! attempt to validate per-method formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for payout account details (in bytes)
pub const ACCOUNT_DETAILS_MAX_LENGTH: usize = 255;

/// Error returned when payout details are rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountDetailsError {
    /// Details are empty after trimming
    Empty,

    /// Details are too long (maximum: ACCOUNT_DETAILS_MAX_LENGTH bytes)
    TooLong { length: usize, max: usize },
}

impl fmt::Display for AccountDetailsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Payout account details cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Payout account details are too long ({length} bytes, maximum {max})")
            }
        }
    }
}

impl std::error::Error for AccountDetailsError {}

/// Validated payout destination
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountDetails(String);

impl AccountDetails {
    /// Create new AccountDetails from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, AccountDetailsError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccountDetailsError::Empty);
        }
        if trimmed.len() > ACCOUNT_DETAILS_MAX_LENGTH {
            return Err(AccountDetailsError::TooLong {
                length: trimmed.len(),
                max: ACCOUNT_DETAILS_MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Create from a database value (assumes already validated)
    pub fn from_db(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for AccountDetails {
    type Error = AccountDetailsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountDetails> for String {
    fn from(details: AccountDetails) -> Self {
        details.0
    }
}

impl fmt::Debug for AccountDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Phone numbers and pay IDs; keep logs terse
        write!(f, "AccountDetails(len={})", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_opaque_strings() {
        let details = AccountDetails::new("03001234567").unwrap();
        assert_eq!(details.as_str(), "03001234567");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let details = AccountDetails::new("  pay-id-889  ").unwrap();
        assert_eq!(details.as_str(), "pay-id-889");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(AccountDetails::new(""), Err(AccountDetailsError::Empty));
        assert_eq!(AccountDetails::new("   "), Err(AccountDetailsError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "9".repeat(ACCOUNT_DETAILS_MAX_LENGTH + 1);
        assert!(matches!(
            AccountDetails::new(&long),
            Err(AccountDetailsError::TooLong { .. })
        ));
    }

    #[test]
    fn test_debug_does_not_leak_value() {
        let details = AccountDetails::new("03001234567").unwrap();
        let debug = format!("{:?}", details);
        assert!(!debug.contains("03001234567"));
    }
}
