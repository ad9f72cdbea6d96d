//! Wallet Error Types
//!
//! This module provides wallet-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Wallet-specific result type alias
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet-specific error variants
#[derive(Debug, Error)]
pub enum WalletError {
    /// Account standing forbids balance mutations
    #[error("Account is blocked")]
    AccountBlocked,

    /// Daily claim cap reached
    #[error("Daily claim limit reached")]
    RateLimited,

    /// This claim slot requires a verified challenge
    #[error("A solved challenge is required for this claim")]
    ChallengeRequired,

    /// Challenge missing, expired, foreign, or answered wrong
    #[error("Challenge verification failed")]
    ChallengeFailed,

    /// Client IP flagged as proxy or hosting by the reputation service
    #[error("Requests from this network are not eligible for rewards")]
    SuspiciousOrigin,

    /// Withdrawal amount under the configured minimum
    #[error("Minimum withdrawal is {minimum} coins")]
    BelowMinimum { minimum: i64 },

    /// Balance does not cover the requested amount
    #[error("Insufficient balance")]
    InsufficientFunds,

    /// Request payload failed validation (amount, method, details)
    #[error("Invalid request: {0}")]
    InvalidDetails(String),

    /// Withdrawal request was already decided
    #[error("Withdrawal request was already decided")]
    AlreadyDecided,

    /// Withdrawal request not found
    #[error("Withdrawal request not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WalletError::AccountBlocked | WalletError::SuspiciousOrigin => StatusCode::FORBIDDEN,
            WalletError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            WalletError::ChallengeRequired | WalletError::ChallengeFailed => {
                StatusCode::PRECONDITION_REQUIRED
            }
            WalletError::BelowMinimum { .. }
            | WalletError::InsufficientFunds
            | WalletError::InvalidDetails(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WalletError::AlreadyDecided => StatusCode::CONFLICT,
            WalletError::NotFound => StatusCode::NOT_FOUND,
            WalletError::Database(_) | WalletError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::AccountBlocked => "ACCOUNT_BLOCKED",
            WalletError::RateLimited => "RATE_LIMITED",
            WalletError::ChallengeRequired => "CHALLENGE_REQUIRED",
            WalletError::ChallengeFailed => "CHALLENGE_FAILED",
            WalletError::SuspiciousOrigin => "SUSPICIOUS_ORIGIN",
            WalletError::BelowMinimum { .. } => "BELOW_MINIMUM",
            WalletError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            WalletError::InvalidDetails(_) => "INVALID_DETAILS",
            WalletError::AlreadyDecided => "ALREADY_DECIDED",
            WalletError::NotFound => "NOT_FOUND",
            WalletError::Database(_) | WalletError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::AccountBlocked | WalletError::SuspiciousOrigin => ErrorKind::Forbidden,
            WalletError::RateLimited => ErrorKind::TooManyRequests,
            WalletError::ChallengeRequired | WalletError::ChallengeFailed => {
                ErrorKind::PreconditionRequired
            }
            WalletError::BelowMinimum { .. }
            | WalletError::InsufficientFunds
            | WalletError::InvalidDetails(_) => ErrorKind::UnprocessableEntity,
            WalletError::AlreadyDecided => ErrorKind::Conflict,
            WalletError::NotFound => ErrorKind::NotFound,
            WalletError::Database(_) | WalletError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let error = AppError::new(self.kind(), self.to_string()).with_code(self.code());
        match self {
            WalletError::RateLimited => error.with_action("Come back tomorrow for more rewards"),
            WalletError::ChallengeRequired => {
                error.with_action("Request a challenge and submit the answer with your claim")
            }
            WalletError::InsufficientFunds => {
                error.with_action("Keep earning and try again once your balance covers the amount")
            }
            _ => error,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WalletError::Database(e) => {
                tracing::error!(error = %e, "Wallet database error");
            }
            WalletError::Internal(msg) => {
                tracing::error!(message = %msg, "Wallet internal error");
            }
            WalletError::SuspiciousOrigin => {
                tracing::warn!("Claim rejected for flagged network origin");
            }
            WalletError::ChallengeFailed => {
                tracing::warn!("Claim challenge verification failed");
            }
            WalletError::AlreadyDecided => {
                tracing::warn!("Duplicate decision attempt on a withdrawal request");
            }
            _ => {
                tracing::debug!(error = %self, "Wallet error");
            }
        }
    }
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for WalletError {
    fn from(err: AppError) -> Self {
        WalletError::Internal(err.to_string())
    }
}
