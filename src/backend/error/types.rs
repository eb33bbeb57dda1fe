/**
 * API Error Types
 *
 * This module defines the error taxonomy used throughout the backend.
 * Every handler and service returns `ApiError`; the variant determines
 * the HTTP status code and the response body.
 *
 * # Propagation Policy
 *
 * Transactional operations roll back fully on any internal failure, so a
 * partially applied write (a letter without its rate-limit timestamp, or
 * a signature inserted without a fresh count) is never observable. No
 * operation retries automatically; transient storage errors surface
 * immediately as `Persistence`.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// Each variant maps to one HTTP status code. Storage errors keep their
/// sqlx detail for logging but are never echoed to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-correctable input problem (bad search field, malformed
    /// identifier, invalid payload shape)
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credentials
    #[error("{0}")]
    Unauthenticated(String),

    /// Resource does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Letter creation attempted before the cooldown window elapsed
    #[error("please wait {retry_after_seconds} seconds before sending another letter")]
    RateLimited {
        /// Whole seconds remaining until the next creation is allowed
        retry_after_seconds: i64,
    },

    /// Storage failure (unreachable database, constraint violation,
    /// transaction failure). Returned to the caller as an opaque message.
    #[error("internal storage error")]
    Persistence(#[from] sqlx::Error),

    /// Non-storage internal failure (password hashing, token signing)
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an authentication error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    /// Create an internal error from a non-storage failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller
    ///
    /// Storage and internal errors are opaque: the detail is logged at
    /// conversion time, never serialized into the response.
    pub fn public_message(&self) -> String {
        match self {
            Self::Persistence(_) => "internal storage error".to_string(),
            Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthenticated("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("letter").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::RateLimited {
                retry_after_seconds: 30
            }
            .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Persistence(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rate_limited_message_names_the_wait() {
        let err = ApiError::RateLimited {
            retry_after_seconds: 42,
        };
        assert!(err.public_message().contains("42"));
    }

    #[test]
    fn test_persistence_detail_is_opaque() {
        let err = ApiError::Persistence(sqlx::Error::PoolTimedOut);
        let message = err.public_message();
        assert_eq!(message, "internal storage error");
        assert!(!message.to_lowercase().contains("pool"));
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::NotFound("letter");
        assert_eq!(err.public_message(), "letter not found");
    }
}
