//! Access Session Entity
//!
//! Represents a resolved caller identity with a server-side session row.
//! The cookie carries only a signed reference to this row; role and standing
//! are re-read from the user on every guard pass so admin actions (blocking)
//! take effect immediately.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Access session entity
#[derive(Debug, Clone)]
pub struct AccessSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Client fingerprint hash (User-Agent based)
    pub client_fingerprint_hash: Vec<u8>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last guard pass
    pub last_seen_at: DateTime<Utc>,
}

impl AccessSession {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, fingerprint_hash: Vec<u8>, ttl_ms: i64) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            expires_at_ms: now.timestamp_millis() + ttl_ms,
            client_fingerprint_hash: fingerprint_hash,
            created_at: now,
            last_seen_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last seen timestamp
    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_expired() {
        let session = AccessSession::new(UserId::new(), vec![0u8; 32], 60_000);
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > 0);
    }

    #[test]
    fn test_zero_ttl_expires() {
        let session = AccessSession::new(UserId::new(), vec![0u8; 32], -1);
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }

    #[test]
    fn test_touch_advances_last_seen() {
        let mut session = AccessSession::new(UserId::new(), vec![0u8; 32], 60_000);
        let before = session.last_seen_at;
        session.touch();
        assert!(session.last_seen_at >= before);
    }
}
