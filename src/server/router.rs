//! Route table, OpenAPI document and HTTP middleware stack.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, HealthDto, MessageDto, ValidationErrorDto},
        book::{
            BookCreatedDto, BookDetailDto, BookDto, BookListDto, BookPaginationDto, CreateBookDto,
            ReviewPaginationDto,
        },
        review::{CreateReviewDto, ReviewDto, ReviewMessageDto, UpdateReviewDto},
        search::{SearchPaginationDto, SearchResultDto},
        user::UserSummaryDto,
    },
    server::{
        controller::{
            book::{self, add_book, get_book, list_books},
            health::{self, health},
            review::{self, create_review, delete_review, update_review},
            search::{self, search_books},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Book Review API", description = "Books, reviews and derived ratings."),
    paths(
        book::add_book,
        book::list_books,
        book::get_book,
        review::create_review,
        review::update_review,
        review::delete_review,
        search::search_books,
        health::health,
    ),
    components(schemas(
        ErrorDto,
        FieldErrorDto,
        ValidationErrorDto,
        MessageDto,
        HealthDto,
        UserSummaryDto,
        CreateBookDto,
        BookDto,
        BookCreatedDto,
        BookListDto,
        BookPaginationDto,
        BookDetailDto,
        ReviewPaginationDto,
        CreateReviewDto,
        UpdateReviewDto,
        ReviewDto,
        ReviewMessageDto,
        SearchPaginationDto,
        SearchResultDto,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "book", description = "Book catalogue"),
        (name = "review", description = "Reviews and ratings"),
        (name = "search", description = "Title and author search"),
        (name = "health", description = "Operational endpoints"),
    ),
)]
pub struct ApiDoc;

/// Registers the bearer token scheme referenced by authenticated routes.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", post(add_book).get(list_books))
        .route("/books/{id}", get(get_book))
        .route("/books/{id}/reviews", post(create_review))
        .route("/reviews/{id}", put(update_review).delete(delete_review))
        .route("/search", get(search_books))
        .route("/health", get(health))
}

/// Builds the complete application: API routes, documentation and middleware.
pub fn app(state: AppState) -> Router {
    router()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod test;
