//! Payment Method Value Object
//!
//! The payout channels members can withdraw through. The set is closed on
//! purpose: adding a channel is a code change, not a configuration knob, so
//! every stored request always maps to a method we can actually pay.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported payout channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum PaymentMethod {
    /// EasyPaisa mobile wallet
    EasyPaisa = 0,

    /// JazzCash mobile wallet
    JazzCash = 1,

    /// Binance Pay transfer
    BinancePay = 2,
}

impl PaymentMethod {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EasyPaisa => "easypaisa",
            Self::JazzCash => "jazzcash",
            Self::BinancePay => "binance",
        }
    }

    /// Human-readable label used in ledger descriptions
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EasyPaisa => "EasyPaisa",
            Self::JazzCash => "JazzCash",
            Self::BinancePay => "Binance Pay",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::EasyPaisa),
            1 => Some(Self::JazzCash),
            2 => Some(Self::BinancePay),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "easypaisa" => Some(Self::EasyPaisa),
            "jazzcash" => Some(Self::JazzCash),
            "binance" => Some(Self::BinancePay),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(PaymentMethod::EasyPaisa.id(), 0);
        assert_eq!(PaymentMethod::JazzCash.id(), 1);
        assert_eq!(PaymentMethod::BinancePay.id(), 2);
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(PaymentMethod::EasyPaisa.code(), "easypaisa");
        assert_eq!(PaymentMethod::JazzCash.code(), "jazzcash");
        assert_eq!(PaymentMethod::BinancePay.code(), "binance");
    }

    #[test]
    fn test_from_code_roundtrip() {
        for method in [
            PaymentMethod::EasyPaisa,
            PaymentMethod::JazzCash,
            PaymentMethod::BinancePay,
        ] {
            assert_eq!(PaymentMethod::from_code(method.code()), Some(method));
            assert_eq!(PaymentMethod::from_id(method.id()), Some(method));
        }
        assert_eq!(PaymentMethod::from_code("paypal"), None);
        assert_eq!(PaymentMethod::from_id(3), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::EasyPaisa.label(), "EasyPaisa");
        assert_eq!(PaymentMethod::BinancePay.label(), "Binance Pay");
    }
}
