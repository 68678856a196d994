//! Error type definitions for authentication and validation operations.

use thiserror::Error;

/// Authentication-related errors
///
/// Login failure is deliberately a single generic variant: the flow never
/// reveals whether the identifier or the secret was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },

    #[error("Business rule violation: {rule}")]
    BusinessRuleViolation { rule: String },
}
