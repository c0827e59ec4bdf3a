//! Session error types.

use entities::validate::FieldErrors;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No roster entry matches the supplied email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Per-field validation failures, detected before any state change.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Catalog error.
    #[error(transparent)]
    Catalog(#[from] catalog_store::CatalogError),

    /// Session persistence error.
    #[error("session persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// Session serialization error.
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
