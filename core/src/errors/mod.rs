//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Store read failures (including malformed JSON) and unexpected lookup
/// failures all collapse into `Internal`; no distinction between parse
/// failure and logic failure is surfaced to callers.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
