use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        review::{CreateReviewDto, ReviewMessageDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::{SubmitReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
        util::extract::{Json, Path},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Submit a review for a book.
///
/// Each user may review a book once. The book's average rating is recomputed.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Review added
/// - `400 Bad Request` - Invalid fields, or the user already reviewed this book
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No such book
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/books/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = CreateReviewDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Review added", body = ReviewMessageDto),
        (status = 400, description = "Invalid fields or duplicate review", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(book_id): Path<i32>,
    payload: Result<Json<CreateReviewDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;
    let Json(payload) = payload?;

    let service = ReviewService::new(&state.db);

    let review = service
        .submit(SubmitReviewParams::from_dto(book_id, user.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(ReviewMessageDto {
            message: "Review added successfully".to_string(),
            review: review.into_dto(),
        }),
    ))
}

/// Update a review.
///
/// Applies the provided rating and/or comment. The book's average rating is recomputed.
///
/// # Access Control
/// - The review's author only
///
/// # Returns
/// - `200 OK` - Review updated
/// - `400 Bad Request` - Invalid fields
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Review belongs to another user
/// - `404 Not Found` - No such review
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Review updated", body = ReviewMessageDto),
        (status = 400, description = "Invalid fields", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Review belongs to another user", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
    payload: Result<Json<UpdateReviewDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;
    let Json(payload) = payload?;

    let service = ReviewService::new(&state.db);

    let review = service
        .update(UpdateReviewParams::from_dto(review_id, user.id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(ReviewMessageDto {
            message: "Review updated successfully".to_string(),
            review: review.into_dto(),
        }),
    ))
}

/// Delete a review.
///
/// The book's average rating is recomputed.
///
/// # Access Control
/// - The review's author only
///
/// # Returns
/// - `200 OK` - Review deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Review belongs to another user
/// - `404 Not Found` - No such review
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Review belongs to another user", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = ReviewService::new(&state.db);

    service.delete(review_id, user.id).await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Review deleted successfully".to_string(),
        }),
    ))
}
