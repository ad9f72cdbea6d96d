//! Accounts (Identity & Sessions) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, guard middleware
//!
//! ## Features
//! - Gateway-verified identity exchange (accounts created on first session)
//! - Server-side sessions with HMAC-signed cookie tokens
//! - Role-based access (Member, Admin)
//! - Admin moderation of member standing (active / blocked)
//!
//! ## Security Model
//! - The identity gateway authenticates callers upstream; this service never
//!   sees provider credentials, only a shared gateway key
//! - Session tokens are signed with HMAC-SHA256 and verified before lookup
//! - Sessions bound to client fingerprint (User-Agent)
//! - Role and standing are re-read from the user row on every guarded
//!   request, so blocks take effect immediately

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::check_session::CurrentUser;
pub use application::config::AccountsConfig;
pub use error::{AccountsError, AccountsResult};
pub use infra::postgres::PgAccountsRepository;
pub use presentation::router::session_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAccountsRepository as AccountsStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
