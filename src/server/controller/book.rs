use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        book::{BookCreatedDto, BookDetailDto, BookListDto, CreateBookDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            book::{AddBookParams, BookFilter},
            pagination::Pagination,
        },
        service::book::BookService,
        state::AppState,
        util::extract::{Json, Path, Query},
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksQuery {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Items per page, 1 to 50 (default: 10)
    pub limit: Option<u64>,
    /// Case-insensitive substring of the author
    pub author: Option<String>,
    /// Case-insensitive substring of the genre
    pub genre: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Items per page, 1 to 50 (default: 10)
    pub limit: Option<u64>,
}

/// Add a new book.
///
/// Creates a book owned by the authenticated user. The response expands `addedBy`
/// including the owner's email.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Book added
/// - `400 Bad Request` - Invalid fields, or the ISBN is already used
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Book added", body = BookCreatedDto),
        (status = 400, description = "Invalid fields or duplicate ISBN", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateBookDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;
    let Json(payload) = payload?;

    let service = BookService::new(&state.db);

    let book = service
        .add(AddBookParams::from_dto(payload), user.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(BookCreatedDto {
            message: "Book added successfully".to_string(),
            book: book.into_dto_with_owner_email(),
        }),
    ))
}

/// List books.
///
/// Returns books newest first, optionally filtered by author and genre.
///
/// # Returns
/// - `200 OK` - One page of books
/// - `400 Bad Request` - Page or limit out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books",
    tag = BOOK_TAG,
    params(ListBooksQuery),
    responses(
        (status = 200, description = "One page of books", body = BookListDto),
        (status = 400, description = "Invalid pagination", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let books = service
        .list(
            BookFilter::new(query.author, query.genre),
            Pagination::new(query.page, query.limit),
        )
        .await?;

    Ok((StatusCode::OK, axum::Json(books.into_dto())))
}

/// Get a book with its reviews.
///
/// Returns the book and one page of its reviews, newest first.
///
/// # Returns
/// - `200 OK` - Book and review page
/// - `400 Bad Request` - Invalid id or pagination
/// - `404 Not Found` - No such book
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Book with one page of reviews", body = BookDetailDto),
        (status = 400, description = "Invalid id or pagination", body = ValidationErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let detail = service
        .get_detail(book_id, Pagination::new(query.page, query.limit))
        .await?;

    Ok((StatusCode::OK, axum::Json(detail.into_dto())))
}
