//! Listing Error Types
//!
//! Listing-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Listing-specific result type alias
pub type ListingResult<T> = Result<T, ListingError>;

/// Action text attached to rate-limited responses
pub const RETRY_LATER_ACTION: &str = "Please wait a moment before submitting again.";

/// Listing-specific error variants
///
/// The first five are the outcome categories callers must be able to tell
/// apart. `Internal` only appears when a stored row breaks an invariant.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Missing or wrong admin key
    #[error("Unauthorized")]
    Unauthorized,

    /// Admission denied by the request limiter
    #[error("Too many requests")]
    RateLimited,

    /// Malformed input
    #[error("{0}")]
    Validation(String),

    /// Targeted listing does not exist
    #[error("Listing not found")]
    NotFound,

    /// Backing store unreachable or not configured
    #[error("Listing storage is unavailable")]
    StorageUnavailable(#[source] Option<sqlx::Error>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ListingError {
    /// Store not configured at all
    pub fn unconfigured() -> Self {
        ListingError::StorageUnavailable(None)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListingError::Unauthorized => StatusCode::UNAUTHORIZED,
            ListingError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ListingError::Validation(_) => StatusCode::BAD_REQUEST,
            ListingError::NotFound => StatusCode::NOT_FOUND,
            ListingError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ListingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListingError::Unauthorized => ErrorKind::Unauthorized,
            ListingError::RateLimited => ErrorKind::TooManyRequests,
            ListingError::Validation(_) => ErrorKind::BadRequest,
            ListingError::NotFound => ErrorKind::NotFound,
            ListingError::StorageUnavailable(_) => ErrorKind::ServiceUnavailable,
            ListingError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ListingError::RateLimited => err.with_action(RETRY_LATER_ACTION),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ListingError::StorageUnavailable(Some(e)) => {
                tracing::error!(error = %e, "Listing database error");
            }
            ListingError::StorageUnavailable(None) => {
                tracing::error!("Listing storage is not configured");
            }
            ListingError::Internal(msg) => {
                tracing::error!(message = %msg, "Listing internal error");
            }
            ListingError::Unauthorized => {
                tracing::warn!("Rejected admin request");
            }
            ListingError::RateLimited => {
                tracing::warn!("Listing rate limit exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Listing error");
            }
        }
    }
}

impl From<sqlx::Error> for ListingError {
    fn from(err: sqlx::Error) -> Self {
        ListingError::StorageUnavailable(Some(err))
    }
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_categories_have_distinct_statuses() {
        let statuses = [
            ListingError::Unauthorized.status_code(),
            ListingError::RateLimited.status_code(),
            ListingError::Validation("x".into()).status_code(),
            ListingError::NotFound.status_code(),
            ListingError::unconfigured().status_code(),
        ];
        for (i, a) in statuses.iter().enumerate() {
            for b in &statuses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_status_matches_kind() {
        for err in [
            ListingError::Unauthorized,
            ListingError::RateLimited,
            ListingError::Validation("bad".into()),
            ListingError::NotFound,
            ListingError::unconfigured(),
            ListingError::Internal("boom".into()),
        ] {
            assert_eq!(err.status_code().as_u16(), err.kind().status_code());
        }
    }

    #[test]
    fn test_rate_limited_carries_action() {
        let app: AppError = ListingError::RateLimited.into();
        assert_eq!(app.action(), Some(RETRY_LATER_ACTION));
        let app: AppError = ListingError::NotFound.into();
        assert_eq!(app.action(), None);
        assert_eq!(app.message(), "Listing not found");
    }

    #[test]
    fn test_sqlx_error_is_storage_unavailable() {
        let err: ListingError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, ListingError::StorageUnavailable(Some(_))));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
