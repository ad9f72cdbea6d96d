//! Value Object Module

pub mod account_details;
pub mod account_level;
pub mod entry_status;
pub mod payment_method;
pub mod transaction_kind;
pub mod withdrawal_status;
