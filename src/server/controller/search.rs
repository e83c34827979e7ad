use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        search::SearchResultDto,
    },
    server::{
        error::AppError, model::pagination::Pagination, service::search::SearchService,
        state::AppState, util::extract::Query,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to find in book titles and authors, ignoring case
    pub q: Option<String>,
    /// Page number, starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Items per page, 1 to 50 (default: 10)
    pub limit: Option<u64>,
}

/// Search books by title or author.
///
/// # Returns
/// - `200 OK` - One page of matching books
/// - `400 Bad Request` - Missing query or invalid pagination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/search",
    tag = SEARCH_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "One page of matching books", body = SearchResultDto),
        (status = 400, description = "Missing query or invalid pagination", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SearchService::new(&state.db);

    let results = service
        .search(query.q, Pagination::new(query.page, query.limit))
        .await?;

    Ok((StatusCode::OK, axum::Json(results.into_dto())))
}
