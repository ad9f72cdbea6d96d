//! Claim Challenge Entity
//!
//! A short-lived arithmetic question issued before periodic claims. The
//! expected answer never leaves the server; the client only sees the two
//! operands. Challenges are single-use and consumed on verification.

use chrono::{DateTime, Utc};
use kernel::id::ClaimChallengeId;
use std::time::Duration;

use accounts::models::user_id::UserId;

/// Claim challenge entity
#[derive(Debug, Clone)]
pub struct ClaimChallenge {
    /// Internal UUID identifier
    pub challenge_id: ClaimChallengeId,
    /// User the challenge was issued to
    pub user_id: UserId,
    /// Left operand shown to the client
    pub left_operand: i32,
    /// Right operand shown to the client
    pub right_operand: i32,
    /// Answer the server expects (never serialized to the client)
    pub expected_answer: i32,
    /// Expiry (epoch milliseconds)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl ClaimChallenge {
    /// Issue a new challenge for the given operands
    pub fn new(user_id: UserId, left_operand: i32, right_operand: i32, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            challenge_id: ClaimChallengeId::new(),
            user_id,
            left_operand,
            right_operand,
            expected_answer: left_operand + right_operand,
            expires_at_ms: now.timestamp_millis() + ttl.as_millis() as i64,
            created_at: now,
        }
    }

    /// Check if the challenge has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Check a submitted answer against the expected one
    pub fn verify(&self, answer: i32) -> bool {
        self.expected_answer == answer
    }
}
