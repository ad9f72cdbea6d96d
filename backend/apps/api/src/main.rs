//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use accounts::middleware::{GuardState, require_admin, require_session};
use accounts::{AccountsConfig, PgAccountsRepository, session_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet::config::IpReputationConfig;
use wallet::{PgWalletRepository, WalletConfig, admin_router, wallet_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,accounts=info,wallet=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: drop expired sessions and claim challenges
    // Errors here should not prevent server startup
    let accounts_repo = PgAccountsRepository::new(pool.clone());
    match accounts_repo.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Session cleanup failed, continuing anyway"
            );
        }
    }

    let wallet_repo = PgWalletRepository::new(pool.clone());
    match wallet_repo.cleanup_expired().await {
        Ok(challenges) => {
            tracing::info!(
                challenges_deleted = challenges,
                "Challenge cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Challenge cleanup failed, continuing anyway"
            );
        }
    }

    // Accounts configuration
    let accounts_config = if cfg!(debug_assertions) {
        AccountsConfig::development()
    } else {
        // In production, load secrets from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to exactly 32 bytes"
        );
        let mut session_secret = [0u8; 32];
        session_secret.copy_from_slice(&secret_bytes);

        let gateway_key = env::var("IDENTITY_GATEWAY_KEY")
            .expect("IDENTITY_GATEWAY_KEY must be set in production")
            .into_bytes();

        AccountsConfig {
            session_secret,
            gateway_key,
            ..AccountsConfig::default()
        }
    };
    let accounts_config = Arc::new(accounts_config);

    // Wallet configuration: policy defaults, origin checks by explicit opt-in
    let mut wallet_config = WalletConfig::default();
    if env::var("IP_CHECK_ENABLED").is_ok_and(|v| v == "1" || v == "true") {
        wallet_config.ip_reputation = IpReputationConfig::default();
    }
    let wallet_config = Arc::new(wallet_config);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Both guards read the same user rows, so a block lands on live sessions
    let guard = GuardState {
        repo: Arc::new(accounts_repo.clone()),
        config: accounts_config.clone(),
    };

    let member_routes = wallet_router(wallet_repo.clone(), wallet_config.clone()).layer(
        axum::middleware::from_fn({
            let guard = guard.clone();
            move |req, next| require_session(guard.clone(), req, next)
        }),
    );

    let admin_routes = admin_router(
        wallet_repo.clone(),
        accounts_repo.clone(),
        wallet_config.clone(),
    )
    .layer(axum::middleware::from_fn({
        let guard = guard.clone();
        move |req, next| require_admin(guard.clone(), req, next)
    }));

    // Build router
    let api = Router::new()
        .nest(
            "/session",
            session_router(accounts_repo.clone(), accounts_config.clone()),
        )
        .nest("/admin", admin_routes)
        .merge(member_routes);

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("API_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(31113);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
