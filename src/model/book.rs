use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{review::ReviewDto, user::UserSummaryDto};

/// Request body for `POST /books`.
///
/// Every field is optional at the wire level so that a missing field is reported as a
/// validation error against that field instead of a generic body error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub isbn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub published_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub added_by: UserSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookCreatedDto {
    pub message: String,
    pub book: BookDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_books: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookListDto {
    pub books: Vec<BookDto>,
    pub pagination: BookPaginationDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_reviews: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// A book with one page of its reviews.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDetailDto {
    pub book: BookDto,
    pub reviews: Vec<ReviewDto>,
    pub pagination: ReviewPaginationDto,
}
