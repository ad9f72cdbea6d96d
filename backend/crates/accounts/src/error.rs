//! Accounts Error Types
//!
//! This module provides accounts-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountsResult<T> = Result<T, AccountsError>;

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountsError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Gateway key missing or wrong (session issuance is gateway-only)
    #[error("Gateway key rejected")]
    InvalidGatewayKey,

    /// Identity assertion failed validation (subject, name, role)
    #[error("Invalid identity assertion: {0}")]
    InvalidIdentity(String),

    /// Session not found or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Session fingerprint mismatch
    #[error("Session fingerprint mismatch")]
    SessionFingerprintMismatch,

    /// Caller is not an admin
    #[error("Admin role required")]
    AdminRequired,

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountsError::UserNotFound => StatusCode::NOT_FOUND,
            AccountsError::InvalidGatewayKey => StatusCode::UNAUTHORIZED,
            AccountsError::InvalidIdentity(_) => StatusCode::BAD_REQUEST,
            AccountsError::SessionInvalid | AccountsError::SessionFingerprintMismatch => {
                StatusCode::UNAUTHORIZED
            }
            AccountsError::AdminRequired => StatusCode::FORBIDDEN,
            AccountsError::MissingHeader(_) => StatusCode::BAD_REQUEST,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            AccountsError::UserNotFound => "USER_NOT_FOUND",
            AccountsError::InvalidGatewayKey => "INVALID_GATEWAY_KEY",
            AccountsError::InvalidIdentity(_) => "INVALID_IDENTITY",
            AccountsError::SessionInvalid => "SESSION_INVALID",
            AccountsError::SessionFingerprintMismatch => "SESSION_INVALID",
            AccountsError::AdminRequired => "ADMIN_REQUIRED",
            AccountsError::MissingHeader(_) => "MISSING_HEADER",
            AccountsError::Database(_) | AccountsError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountsError::UserNotFound => ErrorKind::NotFound,
            AccountsError::InvalidGatewayKey
            | AccountsError::SessionInvalid
            | AccountsError::SessionFingerprintMismatch => ErrorKind::Unauthorized,
            AccountsError::InvalidIdentity(_) | AccountsError::MissingHeader(_) => {
                ErrorKind::BadRequest
            }
            AccountsError::AdminRequired => ErrorKind::Forbidden,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string()).with_code(self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountsError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountsError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountsError::InvalidGatewayKey => {
                tracing::warn!("Session issuance attempt with rejected gateway key");
            }
            AccountsError::SessionFingerprintMismatch => {
                tracing::warn!("Session fingerprint mismatch detected");
            }
            AccountsError::AdminRequired => {
                tracing::warn!("Admin route denied for non-admin session");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountsError {
    fn from(err: AppError) -> Self {
        AccountsError::Internal(err.to_string())
    }
}

impl From<platform::client::FingerprintError> for AccountsError {
    fn from(err: platform::client::FingerprintError) -> Self {
        match err {
            platform::client::FingerprintError::MissingHeader(header) => {
                AccountsError::MissingHeader(header)
            }
        }
    }
}
