//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordPolicyError;
use platform::token::TokenError;
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    /// Wrong password for an existing user
    #[error("Invalid credentials")]
    CredentialsInvalid,

    /// No bearer token on a protected request
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Invalid access token")]
    InvalidToken,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    /// Malformed input (user name, password, gender)
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Hashing, random source and signing failures
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNotFound | AuthError::SessionNotFound => StatusCode::NOT_FOUND,
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::CredentialsInvalid
            | AuthError::MissingCredentials
            | AuthError::InvalidToken
            | AuthError::RefreshTokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound | AuthError::SessionNotFound => ErrorKind::NotFound,
            AuthError::UserAlreadyExists => ErrorKind::Conflict,
            AuthError::CredentialsInvalid
            | AuthError::MissingCredentials
            | AuthError::InvalidToken
            | AuthError::RefreshTokenExpired => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Infrastructure detail never reaches the caller.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::RefreshTokenExpired => {
                AppError::new(self.kind(), self.to_string()).with_action("Log in again")
            }
            AuthError::MissingCredentials => AppError::new(self.kind(), self.to_string())
                .with_action("Send an Authorization: Bearer <token> header"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::CredentialsInvalid => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected access token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<UserNameError> for AuthError {
    fn from(err: UserNameError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(_) => AuthError::InvalidToken,
            other => AuthError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_matches_kind() {
        let errors = [
            AuthError::UserNotFound,
            AuthError::UserAlreadyExists,
            AuthError::CredentialsInvalid,
            AuthError::MissingCredentials,
            AuthError::InvalidToken,
            AuthError::SessionNotFound,
            AuthError::RefreshTokenExpired,
            AuthError::Validation("bad".to_string()),
            AuthError::Internal("boom".to_string()),
        ];
        for err in errors {
            assert_eq!(err.status_code().as_u16(), err.kind().status_code(), "{err}");
        }
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let app = AuthError::Internal("argon2 params rejected".to_string()).into_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Internal server error");

        let app = AuthError::Database(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(app.message(), "Internal server error");
    }

    #[test]
    fn test_token_error_mapping() {
        let err: AuthError = TokenError::EmptySecret.into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
