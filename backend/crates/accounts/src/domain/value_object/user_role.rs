//! UserRole Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role
///
/// Two roles only: regular members, and admins who may use the moderation
/// surface. Roles are asserted by the identity gateway at account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Member = 0,
    Admin = 1,
}

impl UserRole {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }

    /// Check if the admin surface is allowed
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Create from numeric ID
    ///
    /// Only called with values read back from the database; anything else
    /// means the stored data is corrupt.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => Self::Member,
            1 => Self::Admin,
            _ => {
                tracing::error!("Invalid UserRole id: {}", id);
                unreachable!("Invalid UserRole id: {}", id)
            }
        }
    }

    /// Create from string code (request input, fallible)
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "member" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ids {
        use super::*;

        #[test]
        fn test_role_ids_are_stable() {
            assert_eq!(UserRole::Member.id(), 0);
            assert_eq!(UserRole::Admin.id(), 1);
        }

        #[test]
        fn test_from_id_roundtrip() {
            assert_eq!(UserRole::from_id(0), UserRole::Member);
            assert_eq!(UserRole::from_id(1), UserRole::Admin);
        }
    }

    mod codes {
        use super::*;

        #[test]
        fn test_codes() {
            assert_eq!(UserRole::Member.code(), "member");
            assert_eq!(UserRole::Admin.code(), "admin");
        }

        #[test]
        fn test_from_code() {
            assert_eq!(UserRole::from_code("member"), Some(UserRole::Member));
            assert_eq!(UserRole::from_code("admin"), Some(UserRole::Admin));
            assert_eq!(UserRole::from_code("superuser"), None);
            assert_eq!(UserRole::from_code(""), None);
        }

        #[test]
        fn test_display_matches_code() {
            assert_eq!(UserRole::Admin.to_string(), "admin");
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn test_is_admin() {
            assert!(!UserRole::Member.is_admin());
            assert!(UserRole::Admin.is_admin());
        }

        #[test]
        fn test_default_is_member() {
            assert_eq!(UserRole::default(), UserRole::Member);
        }
    }
}
