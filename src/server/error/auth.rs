use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or a header without the `Bearer` scheme.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request did not carry a bearer token")]
    MissingToken,

    /// The bearer token does not match any issued token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token does not match any issued token")]
    InvalidToken,

    /// The authenticated user is not allowed to act on the resource.
    ///
    /// # Fields
    /// - ID of the user that attempted the action
    /// - Client-facing description of the refused action
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 401 Unauthorized with "Authentication required"
/// - `InvalidToken` → 401 Unauthorized with "Invalid or expired token"
/// - `AccessDenied` → 403 Forbidden with the refused action's message
///
/// Every error is logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required".to_string()),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            Self::AccessDenied(_, message) => (StatusCode::FORBIDDEN, message),
        };

        (status, Json(ErrorDto { message })).into_response()
    }
}
