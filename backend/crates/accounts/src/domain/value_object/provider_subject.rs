//! Provider Subject Value Object
//!
//! The opaque subject string the identity gateway asserts for a user. It is
//! the find-or-create key for accounts and unique per user. The service never
//! interprets its contents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a provider subject (in bytes)
pub const PROVIDER_SUBJECT_MAX_LENGTH: usize = 255;

/// Error returned when a provider subject is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSubjectError {
    /// Subject is empty after trimming
    Empty,

    /// Subject is too long (maximum: PROVIDER_SUBJECT_MAX_LENGTH bytes)
    TooLong { length: usize, max: usize },
}

impl fmt::Display for ProviderSubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Provider subject cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Provider subject is too long ({length} bytes, maximum {max})")
            }
        }
    }
}

impl std::error::Error for ProviderSubjectError {}

/// Validated provider subject
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderSubject(String);

impl ProviderSubject {
    /// Create a new ProviderSubject from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, ProviderSubjectError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ProviderSubjectError::Empty);
        }
        if trimmed.len() > PROVIDER_SUBJECT_MAX_LENGTH {
            return Err(ProviderSubjectError::TooLong {
                length: trimmed.len(),
                max: PROVIDER_SUBJECT_MAX_LENGTH,
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

impl TryFrom<String> for ProviderSubject {
    type Error = ProviderSubjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderSubject> for String {
    fn from(subject: ProviderSubject) -> Self {
        subject.0
    }
}

impl fmt::Debug for ProviderSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Subjects can embed provider account ids; keep logs terse
        write!(f, "ProviderSubject(len={})", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_opaque_strings() {
        let subject = ProviderSubject::new("google-oauth2|108234591834").unwrap();
        assert_eq!(subject.as_str(), "google-oauth2|108234591834");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let subject = ProviderSubject::new("  sub-123  ").unwrap();
        assert_eq!(subject.as_str(), "sub-123");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(ProviderSubject::new(""), Err(ProviderSubjectError::Empty));
        assert_eq!(ProviderSubject::new("   "), Err(ProviderSubjectError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "s".repeat(PROVIDER_SUBJECT_MAX_LENGTH + 1);
        assert!(matches!(
            ProviderSubject::new(&long),
            Err(ProviderSubjectError::TooLong { .. })
        ));
    }

    #[test]
    fn test_debug_does_not_leak_value() {
        let subject = ProviderSubject::new("secret-subject").unwrap();
        let debug = format!("{:?}", subject);
        assert!(!debug.contains("secret-subject"));
    }
}
