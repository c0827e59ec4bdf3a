//! Application error types.
//!
//! All of these are recovered at the point of the user action and
//! surfaced as a transient notification by the UI layer; none are fatal.

use entities::validate::FieldErrors;
use thiserror::Error;

/// Errors from the rating submission flow.
#[derive(Debug, Error)]
pub enum RatingError {
    /// No session; the caller should redirect to login.
    #[error("authentication required")]
    NotAuthenticated,

    /// Star value outside the accepted 1-5 range.
    #[error("rating value out of range: {0}")]
    InvalidValue(u8),

    /// Catalog error, including an unknown store id.
    #[error(transparent)]
    Catalog(#[from] catalog_store::CatalogError),
}

/// Application-level error surfaced to the UI layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication required.
    #[error("authentication required")]
    AuthenticationRequired,

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Per-field validation failures.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Session error.
    #[error(transparent)]
    Session(#[from] session::SessionError),

    /// Catalog error.
    #[error(transparent)]
    Catalog(#[from] catalog_store::CatalogError),

    /// Rating submission error.
    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;
