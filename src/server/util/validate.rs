//! Helpers shared by the operation parameter types for input normalization and
//! validation.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::server::error::{validation::flatten, AppError};

/// Runs the derived validation rules, returning the (possibly empty) error set so
/// callers can add checks the derive cannot express.
pub fn validation_errors<T: Validate>(params: &T) -> ValidationErrors {
    params.validate().err().unwrap_or_else(ValidationErrors::new)
}

/// Converts a collected error set into a result.
///
/// # Returns
/// - `Ok(())` - No field failed
/// - `Err(AppError::Validation)` - Every failing field, camelCased and sorted
pub fn finish(errors: ValidationErrors) -> Result<(), AppError> {
    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(flatten(&errors)))
    }
}

/// Runs the derived validation rules only.
pub fn check<T: Validate>(params: &T) -> Result<(), AppError> {
    finish(validation_errors(params))
}

/// Builds a validation error with a client-facing message.
pub fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Trims surrounding whitespace, keeping blank values as empty strings.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Trims surrounding whitespace and treats blank values as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    trimmed(value).filter(|v| !v.is_empty())
}
