//! Entity Module

pub mod access_session;
pub mod user;
