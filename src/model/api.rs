use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for every non-validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// A single failed input field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Field name as it appears in the request (`publishedYear`, `body`, `id`, ...).
    pub field: String,
    pub message: String,
}

/// Error body for validation failures, listing every field that failed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<FieldErrorDto>,
}

/// Plain confirmation body, e.g. after deleting a review.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Liveness response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
