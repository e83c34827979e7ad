use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::ConnectionTrait;

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping operational endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check including a database round-trip.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database reachable", body = HealthDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.execute_unprepared("SELECT 1").await?;

    Ok((
        StatusCode::OK,
        axum::Json(HealthDto {
            status: "ok".to_string(),
        }),
    ))
}
