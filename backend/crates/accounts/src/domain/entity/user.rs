//! User Entity
//!
//! Identity and standing only. Coin balances live in the wallet domain.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    full_name::FullName, provider_subject::ProviderSubject, public_id::PublicId, user_id::UserId,
    user_role::UserRole, user_status::UserStatus,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// Subject asserted by the identity gateway (unique, find-or-create key)
    pub provider_subject: ProviderSubject,
    /// Display name
    pub full_name: FullName,
    /// Role (Member, Admin)
    pub user_role: UserRole,
    /// Standing (Active, Blocked)
    pub user_status: UserStatus,
    /// Last successful session open
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at first session open
    pub fn new(
        provider_subject: ProviderSubject,
        full_name: FullName,
        user_role: UserRole,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            provider_subject,
            full_name,
            user_role,
            user_status: UserStatus::default(),
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful session open
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Check if the account may claim rewards or move funds
    pub fn can_transact(&self) -> bool {
        self.user_status.can_transact()
    }

    /// Check if the account may use the admin surface
    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }

    /// Update display name (the gateway may assert a newer one at login)
    pub fn set_full_name(&mut self, full_name: FullName) {
        self.full_name = full_name;
        self.updated_at = Utc::now();
    }

    /// Update standing
    pub fn set_status(&mut self, status: UserStatus) {
        self.user_status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            ProviderSubject::new("provider|abc123").unwrap(),
            FullName::new("Ayesha Khan").unwrap(),
            UserRole::Member,
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.user_status, UserStatus::Active);
        assert_eq!(user.user_role, UserRole::Member);
        assert!(user.last_login_at.is_none());
        assert!(user.can_transact());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_record_login_sets_timestamp() {
        let mut user = sample_user();
        user.record_login();
        assert!(user.last_login_at.is_some());
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn test_blocked_user_cannot_transact() {
        let mut user = sample_user();
        user.set_status(UserStatus::Blocked);
        assert!(!user.can_transact());
        // Standing never destroys the identity
        assert_eq!(user.user_status, UserStatus::Blocked);
    }
}
