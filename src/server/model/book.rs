//! Book domain models and parameters.
//!
//! Provides the book domain model with its owner expanded, the parameter types for adding
//! a book (raw input, then validated), listing filters, and the paginated result shapes
//! returned by the book service.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use sea_orm::DbErr;
use validator::Validate;

use crate::{
    model::book::{BookDetailDto, BookDto, BookListDto, CreateBookDto},
    server::{
        error::AppError,
        model::{pagination::PageInfo, review::Review, user::UserSummary},
        util::validate,
    },
};

pub const MIN_PUBLISHED_YEAR: i32 = 1000;

/// Checksum-agnostic ISBN-10 or ISBN-13, after separators are stripped.
static ISBN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{9}[\dX]|\d{13})$").expect("ISBN pattern is a valid regex")
});

/// Book with its owner expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub published_year: i32,
    pub isbn: Option<String>,
    /// Mean review rating, maintained by the rating aggregator.
    pub average_rating: f64,
    /// Number of reviews, maintained by the rating aggregator.
    pub total_reviews: i32,
    pub added_by: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The book entity from the database
    /// - `owner` - The user entity referenced by `added_by`
    ///
    /// # Returns
    /// - `Ok(Book)` - Domain model with owner expanded
    /// - `Err(DbErr::RecordNotFound)` - The owner row was missing
    pub fn from_entity(
        entity: entity::book::Model,
        owner: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let owner = owner.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "User {} who added book {} not found",
                entity.added_by, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            genre: entity.genre,
            description: entity.description,
            published_year: entity.published_year,
            isbn: entity.isbn,
            average_rating: entity.average_rating,
            total_reviews: entity.total_reviews,
            added_by: UserSummary::from_entity(owner),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts to a DTO with the owner's id and username.
    pub fn into_dto(self) -> BookDto {
        let added_by = self.added_by.clone().into_dto();
        self.into_dto_with_owner(added_by)
    }

    /// Converts to a DTO that also includes the owner's email.
    ///
    /// Only the response to adding a book exposes the email.
    pub fn into_dto_with_owner_email(self) -> BookDto {
        let added_by = self.added_by.clone().into_dto_with_email();
        self.into_dto_with_owner(added_by)
    }

    fn into_dto_with_owner(self, added_by: crate::model::user::UserSummaryDto) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            description: self.description,
            published_year: self.published_year,
            isbn: self.isbn,
            average_rating: self.average_rating,
            total_reviews: self.total_reviews,
            added_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Raw, normalized input for adding a book.
///
/// Strings are trimmed and blanks treated as absent so missing and empty fields both
/// report as required. The ISBN has hyphens and spaces stripped and `x` upper-cased.
#[derive(Debug, Clone, Default, Validate)]
pub struct AddBookParams {
    #[validate(
        required(message = "Title is required"),
        length(max = 200, message = "Title cannot exceed 200 characters")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Author is required"),
        length(max = 100, message = "Author cannot exceed 100 characters")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "Genre is required"),
        length(max = 50, message = "Genre cannot exceed 50 characters")
    )]
    pub genre: Option<String>,
    #[validate(
        required(message = "Description is required"),
        length(max = 2000, message = "Description cannot exceed 2000 characters")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Published year is required"),
        range(min = MIN_PUBLISHED_YEAR, message = "Published year must be 1000 or later")
    )]
    pub published_year: Option<i32>,
    #[validate(regex(
        path = *ISBN_PATTERN,
        message = "ISBN must be 10 characters (last may be X) or 13 digits"
    ))]
    pub isbn: Option<String>,
}

impl AddBookParams {
    /// Normalizes the request body into parameters.
    pub fn from_dto(dto: CreateBookDto) -> Self {
        Self {
            title: validate::non_blank(dto.title),
            author: validate::non_blank(dto.author),
            genre: validate::non_blank(dto.genre),
            description: validate::non_blank(dto.description),
            published_year: dto.published_year,
            isbn: validate::non_blank(dto.isbn).map(|isbn| normalize_isbn(&isbn)),
        }
    }

    /// Validates every field and produces insertable parameters.
    ///
    /// # Arguments
    /// - `added_by` - ID of the authenticated user adding the book
    /// - `current_year` - Upper bound for `published_year`
    ///
    /// # Returns
    /// - `Ok(CreateBookParams)` - All fields valid
    /// - `Err(AppError::Validation)` - Every failing field
    pub fn validate_for(
        self,
        added_by: i32,
        current_year: i32,
    ) -> Result<CreateBookParams, AppError> {
        let mut errors = validate::validation_errors(&self);

        if self.published_year.is_some_and(|year| year > current_year) {
            errors.add(
                "published_year",
                validate::error(
                    "range",
                    format!("Published year cannot be later than {}", current_year),
                ),
            );
        }

        validate::finish(errors)?;

        let (Some(title), Some(author), Some(genre), Some(description), Some(published_year)) = (
            self.title,
            self.author,
            self.genre,
            self.description,
            self.published_year,
        ) else {
            return Err(AppError::InternalError(
                "Required book field absent after validation".to_string(),
            ));
        };

        Ok(CreateBookParams {
            title,
            author,
            genre,
            description,
            published_year,
            isbn: self.isbn,
            added_by,
        })
    }
}

/// Strips hyphens and whitespace and upper-cases the ISBN check character.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validated parameters for inserting a book.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub published_year: i32,
    pub isbn: Option<String>,
    pub added_by: i32,
}

/// Optional case-insensitive substring filters for listing books.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl BookFilter {
    /// Trims both filters and drops blank ones.
    pub fn new(author: Option<String>, genre: Option<String>) -> Self {
        Self {
            author: validate::non_blank(author),
            genre: validate::non_blank(genre),
        }
    }
}

/// One page of books.
#[derive(Debug, Clone)]
pub struct PaginatedBooks {
    pub books: Vec<Book>,
    pub page: PageInfo,
}

impl PaginatedBooks {
    pub fn into_dto(self) -> BookListDto {
        BookListDto {
            books: self.books.into_iter().map(Book::into_dto).collect(),
            pagination: self.page.into_book_dto(),
        }
    }
}

/// A book with one page of its reviews.
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    pub reviews: Vec<Review>,
    pub page: PageInfo,
}

impl BookDetail {
    pub fn into_dto(self) -> BookDetailDto {
        BookDetailDto {
            book: self.book.into_dto(),
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
            pagination: self.page.into_review_dto(),
        }
    }
}
