//! Field-level validators for the checkout form.
//!
//! Validation errors are recoverable and stay local to the form; they block
//! submission but are never surfaced as top-level errors.

use oakleaf_core::Email;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is empty.
    #[error("this field is required")]
    Required,

    /// The field is shorter than the minimum length.
    #[error("must be at least {min} characters")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// The field is non-empty but collapses to nothing after trimming.
    #[error("cannot be only whitespace")]
    WhitespaceOnly,

    /// The field is not a valid email address.
    #[error("must be a valid email address")]
    InvalidEmail,

    /// The card number is not exactly 16 digits.
    #[error("card number must be exactly 16 digits")]
    InvalidCardNumber,

    /// The security code is not exactly 3 digits.
    #[error("security code must be exactly 3 digits")]
    InvalidSecurityCode,
}

/// The field must be non-empty.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// The field must have at least `min` characters.
pub fn min_length(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { min });
    }
    Ok(())
}

/// Rejects values that are non-empty but blank after trimming.
pub fn not_only_whitespace(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        return Err(ValidationError::WhitespaceOnly);
    }
    Ok(())
}

/// Required free-text field with the standard minimum length of 2.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    min_length(value, 2)?;
    not_only_whitespace(value)
}

/// Required email with the `local@domain.tld` shape.
pub fn email(value: &str) -> Result<Email, ValidationError> {
    required(value)?;
    Email::parse(value).map_err(|_| ValidationError::InvalidEmail)
}

/// Required card number of exactly 16 digits.
pub fn card_number(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if value.len() != 16 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCardNumber);
    }
    Ok(())
}

/// Required security code of exactly 3 digits.
pub fn security_code(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if value.len() != 3 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidSecurityCode);
    }
    Ok(())
}
