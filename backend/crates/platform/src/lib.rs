//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64, constant-time compare)
//! - Client identification (fingerprints, forwarded-IP extraction)
//! - Cookie management
//! - Daily quota / rate limiting types
//! - Advisory IP reputation lookup

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod ip_reputation;
pub mod rate_limit;
