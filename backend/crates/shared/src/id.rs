//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type LedgerEntryId = Id<markers::LedgerEntry>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for ledger entry IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LedgerEntry;

    /// Marker for ad claim event IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdClaim;

    /// Marker for claim challenge IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClaimChallenge;

    /// Marker for withdrawal request IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Withdrawal;
}

/// Type aliases for common IDs
pub type LedgerEntryId = Id<markers::LedgerEntry>;
pub type AdClaimId = Id<markers::AdClaim>;
pub type ClaimChallengeId = Id<markers::ClaimChallenge>;
pub type WithdrawalId = Id<markers::Withdrawal>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let entry_id: LedgerEntryId = Id::new();
        let withdrawal_id: WithdrawalId = Id::new();

        // These are different types, cannot be mixed
        let _e: Uuid = entry_id.into_uuid();
        let _w: Uuid = withdrawal_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: AdClaimId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
