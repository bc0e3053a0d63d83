//! Shopping Error Types
//!
//! Group, membership and product failures, integrated with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::crypto::RandomSourceError;
use thiserror::Error;

use crate::domain::value_object::{amount::AmountError, group_profile::GroupProfileError};

/// Shopping-specific result type alias
pub type ShoppingResult<T> = Result<T, ShoppingError>;

#[derive(Debug, Error)]
pub enum ShoppingError {
    #[error("Group not found")]
    GroupNotFound,

    /// The caller (or the kick target) is not a member of the group
    #[error("Member not found")]
    MemberNotFound,

    /// Unknown product, or a catalog entry that does not exist
    #[error("Product not found")]
    ProductNotFound,

    #[error("Already a member of this group")]
    AlreadyMember,

    #[error("Only the group owner can do this")]
    NotOwner,

    #[error("The owner cannot leave the group")]
    OwnerCannotLeave,

    #[error("You cannot kick yourself")]
    CannotKickYourself,

    #[error("Invalid invite code")]
    InvalidCode,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShoppingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShoppingError::GroupNotFound
            | ShoppingError::MemberNotFound
            | ShoppingError::ProductNotFound => StatusCode::NOT_FOUND,
            ShoppingError::AlreadyMember => StatusCode::CONFLICT,
            ShoppingError::NotOwner | ShoppingError::OwnerCannotLeave => StatusCode::FORBIDDEN,
            ShoppingError::CannotKickYourself | ShoppingError::InvalidCode => {
                StatusCode::BAD_REQUEST
            }
            ShoppingError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ShoppingError::Database(_) | ShoppingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShoppingError::GroupNotFound
            | ShoppingError::MemberNotFound
            | ShoppingError::ProductNotFound => ErrorKind::NotFound,
            ShoppingError::AlreadyMember => ErrorKind::Conflict,
            ShoppingError::NotOwner | ShoppingError::OwnerCannotLeave => ErrorKind::Forbidden,
            ShoppingError::CannotKickYourself | ShoppingError::InvalidCode => {
                ErrorKind::BadRequest
            }
            ShoppingError::Validation(_) => ErrorKind::UnprocessableEntity,
            ShoppingError::Database(_) | ShoppingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            ShoppingError::Database(e) => AppError::from(e),
            ShoppingError::Internal(_) => AppError::internal("Internal server error"),
            ShoppingError::OwnerCannotLeave => AppError::new(self.kind(), self.to_string())
                .with_action("Delete the group instead"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ShoppingError::Database(e) => {
                tracing::error!(error = %e, "Shopping database error");
            }
            ShoppingError::Internal(msg) => {
                tracing::error!(message = %msg, "Shopping internal error");
            }
            ShoppingError::NotOwner
            | ShoppingError::OwnerCannotLeave
            | ShoppingError::CannotKickYourself => {
                tracing::warn!(error = %self, "Group policy denied request");
            }
            _ => {
                tracing::debug!(error = %self, "Shopping error");
            }
        }
    }
}

impl IntoResponse for ShoppingError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<GroupProfileError> for ShoppingError {
    fn from(err: GroupProfileError) -> Self {
        ShoppingError::Validation(err.to_string())
    }
}

impl From<AmountError> for ShoppingError {
    fn from(err: AmountError) -> Self {
        ShoppingError::Validation(err.to_string())
    }
}

impl From<RandomSourceError> for ShoppingError {
    fn from(err: RandomSourceError) -> Self {
        ShoppingError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_matches_kind() {
        let errors = [
            ShoppingError::GroupNotFound,
            ShoppingError::MemberNotFound,
            ShoppingError::ProductNotFound,
            ShoppingError::AlreadyMember,
            ShoppingError::NotOwner,
            ShoppingError::OwnerCannotLeave,
            ShoppingError::CannotKickYourself,
            ShoppingError::InvalidCode,
            ShoppingError::Validation("quantity".to_string()),
            ShoppingError::Internal("rng".to_string()),
        ];
        for err in errors {
            assert_eq!(err.status_code().as_u16(), err.kind().status_code(), "{err}");
        }
    }

    #[test]
    fn test_policy_statuses() {
        assert_eq!(ShoppingError::NotOwner.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ShoppingError::OwnerCannotLeave.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ShoppingError::CannotKickYourself.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ShoppingError::InvalidCode.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ShoppingError::AlreadyMember.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let app = ShoppingError::Database(sqlx::Error::RowNotFound).into_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Internal server error");
    }
}
