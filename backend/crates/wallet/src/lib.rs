//! Wallet (Ledger, Claims & Withdrawals) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Append-only coin ledger (integer milli-coins, guarded non-negative balance)
//! - Ad reward claims with a daily cap and periodic arithmetic challenges
//! - Withdrawal requests with up-front fund reservation and admin decisions
//! - Admin dashboard reads (aggregates, user listing, pending queue)
//!
//! ## Consistency Model
//! - Every balance mutation is one database transaction; the account row
//!   lock (or a conditional UPDATE) serializes concurrent writers
//! - Daily caps are counted off claim rows inside that same transaction,
//!   so two racing claims cannot both slip under the cap
//! - A withdrawal decision is a status-guarded transition and happens at
//!   most once; rejection refunds through an explicit ledger entry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::WalletConfig;
pub use error::{WalletError, WalletResult};
pub use infra::postgres::PgWalletRepository;
pub use presentation::router::{admin_router, wallet_router};

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
    pub use crate::infra::postgres::PgWalletRepository as WalletStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
