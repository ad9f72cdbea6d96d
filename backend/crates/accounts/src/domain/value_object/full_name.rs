//! Full Name Value Object
//!
//! The display name asserted by the identity gateway. Unlike a login handle
//! it is never used for lookup or uniqueness, so any script is allowed.
//!
//! ## 不変条件
//! - 長さ: 1〜80文字（正規化後）
//! - NFKC正規化 + 前後の空白除去
//! - 制御文字禁止

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for a display name (in characters)
pub const FULL_NAME_MAX_LENGTH: usize = 80;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when display name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullNameError {
    /// Name is empty after normalization
    Empty,

    /// Name is too long (maximum: FULL_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Name contains a control character
    ContainsControl { position: usize },
}

impl fmt::Display for FullNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Display name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Display name is too long ({length} chars, maximum {max})")
            }
            Self::ContainsControl { position } => {
                write!(f, "Display name contains a control character at position {position}")
            }
        }
    }
}

impl std::error::Error for FullNameError {}

// ============================================================================
// FullName Value Object
// ============================================================================

/// Validated, normalized display name
///
/// # Invariants
/// - Non-empty after normalization
/// - At most FULL_NAME_MAX_LENGTH characters
/// - No control characters
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    /// Create a new FullName from raw input
    ///
    /// Applies normalization (NFKC, trim) and validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FullNameError> {
        let normalized = Self::normalize(input.as_ref());
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Get the display name
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Create from a database value (assumes already validated)
    pub fn from_db(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Normalize input string (trim and NFKC)
    fn normalize(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    /// Validate the normalized display name
    fn validate(name: &str) -> Result<(), FullNameError> {
        if name.is_empty() {
            return Err(FullNameError::Empty);
        }

        let length = name.chars().count();
        if length > FULL_NAME_MAX_LENGTH {
            return Err(FullNameError::TooLong {
                length,
                max: FULL_NAME_MAX_LENGTH,
            });
        }

        if let Some(position) = name.chars().position(|c| c.is_control()) {
            return Err(FullNameError::ContainsControl { position });
        }

        Ok(())
    }
}

impl TryFrom<String> for FullName {
    type Error = FullNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FullName> for String {
    fn from(name: FullName) -> Self {
        name.0
    }
}

impl fmt::Debug for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FullName({:?})", self.0)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_trims_whitespace() {
            let name = FullName::new("  Ayesha Khan  ").unwrap();
            assert_eq!(name.as_str(), "Ayesha Khan");
        }

        #[test]
        fn test_nfkc_normalizes_fullwidth() {
            // Fullwidth letters normalize to ASCII
            let name = FullName::new("Ａｌｉ").unwrap();
            assert_eq!(name.as_str(), "Ali");
        }

        #[test]
        fn test_preserves_case_and_script() {
            let name = FullName::new("Müller 田中").unwrap();
            assert_eq!(name.as_str(), "Müller 田中");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_empty_rejected() {
            assert_eq!(FullName::new(""), Err(FullNameError::Empty));
            assert_eq!(FullName::new("   "), Err(FullNameError::Empty));
        }

        #[test]
        fn test_max_length_boundary() {
            let ok = "x".repeat(FULL_NAME_MAX_LENGTH);
            assert!(FullName::new(&ok).is_ok());

            let too_long = "x".repeat(FULL_NAME_MAX_LENGTH + 1);
            assert!(matches!(
                FullName::new(&too_long),
                Err(FullNameError::TooLong { .. })
            ));
        }

        #[test]
        fn test_control_characters_rejected() {
            assert!(matches!(
                FullName::new("Ali\u{0007}Khan"),
                Err(FullNameError::ContainsControl { .. })
            ));
            // Embedded newline is a control character too
            assert!(matches!(
                FullName::new("Ali\nKhan"),
                Err(FullNameError::ContainsControl { .. })
            ));
        }
    }

    mod serde_impl {
        use super::*;

        #[test]
        fn test_roundtrip() {
            let name = FullName::new("Sara Ahmed").unwrap();
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, r#""Sara Ahmed""#);

            let back: FullName = serde_json::from_str(&json).unwrap();
            assert_eq!(back, name);
        }

        #[test]
        fn test_deserialize_invalid_fails() {
            let result: Result<FullName, _> = serde_json::from_str(r#""""#);
            assert!(result.is_err());
        }
    }
}
