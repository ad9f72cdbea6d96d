//! Session Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAccountsRepository;
use crate::presentation::handlers::{self, AccountsAppState};

/// Create the session router with PostgreSQL repository
pub fn session_router(repo: PgAccountsRepository, config: Arc<AccountsConfig>) -> Router {
    let state = AccountsAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/",
            post(handlers::open_session::<PgAccountsRepository>)
                .get(handlers::session_status::<PgAccountsRepository>)
                .delete(handlers::close_session::<PgAccountsRepository>),
        )
        .with_state(state)
}

/// Create a generic session router for any repository implementation
pub fn session_router_generic<R>(repo: R, config: Arc<AccountsConfig>) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AccountsAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/",
            post(handlers::open_session::<R>)
                .get(handlers::session_status::<R>)
                .delete(handlers::close_session::<R>),
        )
        .with_state(state)
}
