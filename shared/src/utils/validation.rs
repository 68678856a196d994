//! Common validation utilities

use serde::Serialize;
use std::collections::HashMap;

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.add(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

/// Trait for types that can be validated
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// Accepts the phone formats the dashboard stored: optional leading '+',
    /// then digits with optional spaces, dots, or dashes in between.
    static PHONE_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\+?\d(?:[ .\-]?\d){5,19}$").unwrap());

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address is valid (basic check)
    pub fn is_valid_email(email: &str) -> bool {
        email.contains('@') && email.contains('.') && email.len() >= 5
    }

    /// Check if a phone number is plausible
    ///
    /// Stored phone numbers are compared verbatim elsewhere, so this only
    /// guards registration input against obvious garbage.
    pub fn is_plausible_phone(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("alice"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("alice", 1, 10));
        assert!(!length_between("alice", 6, 10));
        assert!(!length_between("alice", 1, 4));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_is_plausible_phone() {
        assert!(is_plausible_phone("08123456789"));
        assert!(is_plausible_phone("+62 812 3456 789"));
        assert!(is_plausible_phone("555-0100-22"));
        assert!(!is_plausible_phone("phone"));
        assert!(!is_plausible_phone("12"));
        assert!(!is_plausible_phone(""));
    }

    #[test]
    fn test_validation_errors_collects_fields() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add_error("username", "Username is required", "REQUIRED");
        errors.add_error("username", "Username is too short", "TOO_SHORT");
        errors.add_error("phoneNumber", "Phone number is invalid", "INVALID");

        assert!(errors.has_errors());
        let by_field = errors.to_field_errors();
        assert_eq!(by_field["username"].len(), 2);
        assert_eq!(by_field["phoneNumber"].len(), 1);
    }
}
