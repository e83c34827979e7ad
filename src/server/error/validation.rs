//! Field-level validation failures.
//!
//! `validator` reports failures keyed by Rust field names. They are flattened here into
//! a sorted list of `FieldError`s keyed by the camelCase names clients send.

use validator::ValidationErrors;

use crate::model::api::FieldErrorDto;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field,
            message: self.message,
        }
    }
}

/// Flattens `validator` errors into field errors sorted by field name.
///
/// Errors without a custom message fall back to a message naming the field.
pub fn flatten(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = to_camel_case(&field);
            field_errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field.clone(), message)
            })
        })
        .collect();

    flattened.sort();
    flattened
}

/// Converts a snake_case identifier into camelCase.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}
