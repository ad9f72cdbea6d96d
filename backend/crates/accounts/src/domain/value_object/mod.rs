//! Value Object Module

pub mod full_name;
pub mod provider_subject;
pub mod public_id;
pub mod user_id;
pub mod user_role;
pub mod user_status;
