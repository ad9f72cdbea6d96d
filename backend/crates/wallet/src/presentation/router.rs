//! Wallet and Admin Routers
//!
//! Paths here are relative to the mount point: the API binary nests the
//! wallet router under `/api` and the admin router under `/api/admin`,
//! with the session and admin guards applied at that composition point.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use accounts::domain::repository::UserRepository;
use accounts::infra::postgres::PgAccountsRepository;

use crate::application::config::WalletConfig;
use crate::domain::repository::{
    AdminReadRepository, ClaimRepository, LedgerRepository, WithdrawalRepository,
};
use crate::infra::postgres::PgWalletRepository;
use crate::presentation::handlers::{self, AdminAppState, WalletAppState};

/// Create the member wallet router with PostgreSQL repository
pub fn wallet_router(repo: PgWalletRepository, config: Arc<WalletConfig>) -> Router {
    wallet_router_generic(repo, config)
}

/// Create a generic member wallet router for any repository implementation
pub fn wallet_router_generic<R>(repo: R, config: Arc<WalletConfig>) -> Router
where
    R: LedgerRepository + ClaimRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
{
    let state = WalletAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/wallet/overview", get(handlers::account_overview::<R>))
        .route("/wallet/history", get(handlers::transaction_history::<R>))
        .route("/earn/challenge", get(handlers::issue_challenge::<R>))
        .route("/earn/claim", post(handlers::claim_reward::<R>))
        .route("/withdrawals", post(handlers::request_withdrawal::<R>))
        .with_state(state)
}

/// Create the admin router with PostgreSQL repositories
pub fn admin_router(
    repo: PgWalletRepository,
    accounts_repo: PgAccountsRepository,
    config: Arc<WalletConfig>,
) -> Router {
    admin_router_generic(repo, accounts_repo, config)
}

/// Create a generic admin router for any repository implementations
pub fn admin_router_generic<R, U>(repo: R, accounts_repo: U, config: Arc<WalletConfig>) -> Router
where
    R: AdminReadRepository + WithdrawalRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AdminAppState {
        repo: Arc::new(repo),
        accounts_repo: Arc::new(accounts_repo),
        config,
    };

    Router::new()
        .route("/stats", get(handlers::admin_stats::<R, U>))
        .route("/users", get(handlers::admin_users::<R, U>))
        .route(
            "/users/{public_id}/status",
            post(handlers::set_user_status::<R, U>),
        )
        .route(
            "/withdrawals/pending",
            get(handlers::pending_withdrawals::<R, U>),
        )
        .route(
            "/withdrawals/{id}/decision",
            post(handlers::decide_withdrawal::<R, U>),
        )
        .with_state(state)
}
