//! Entity Module

pub mod ad_claim;
pub mod claim_challenge;
pub mod ledger_entry;
pub mod wallet_account;
pub mod withdrawal_request;
