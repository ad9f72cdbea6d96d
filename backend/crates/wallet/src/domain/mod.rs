//! Domain Layer
//!
//! Contains entities, value objects, domain services, and repository traits.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{
    ad_claim::AdClaim, claim_challenge::ClaimChallenge, ledger_entry::LedgerEntry,
    wallet_account::WalletAccount, withdrawal_request::WithdrawalRequest,
};
pub use repository::{
    AdminReadRepository, ClaimRepository, LedgerRepository, WithdrawalRepository,
};
