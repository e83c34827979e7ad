use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{book::BookRepository, is_unique_violation, review::ReviewRepository},
    error::AppError,
    model::{
        book::{AddBookParams, Book, BookDetail, BookFilter, PaginatedBooks},
        pagination::{PageInfo, Pagination},
    },
    util::validate,
};

const DUPLICATE_ISBN: &str = "A book with this ISBN already exists";

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a book on behalf of the authenticated user.
    ///
    /// # Returns
    /// - `Ok(Book)` - The stored book with its owner expanded
    /// - `Err(AppError::Validation)` - One or more fields invalid
    /// - `Err(AppError::Conflict)` - The ISBN is already used by another book
    pub async fn add(&self, params: AddBookParams, added_by: i32) -> Result<Book, AppError> {
        let params = params.validate_for(added_by, Utc::now().year())?;
        let repo = BookRepository::new(self.db);

        if let Some(isbn) = &params.isbn {
            if repo.isbn_exists(isbn).await? {
                return Err(AppError::Conflict(DUPLICATE_ISBN.to_string()));
            }
        }

        let book = repo.create(params).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(DUPLICATE_ISBN.to_string())
            } else {
                e.into()
            }
        })?;

        tracing::info!(book_id = book.id, user_id = added_by, "Book added");

        repo.get_by_id(book.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Book {} not found after creation", book.id)))
    }

    /// Lists books newest first, optionally filtered by author and genre.
    pub async fn list(
        &self,
        filter: BookFilter,
        pagination: Pagination,
    ) -> Result<PaginatedBooks, AppError> {
        validate::check(&pagination)?;

        let repo = BookRepository::new(self.db);
        let (books, total) = repo.get_paginated(&filter, &pagination).await?;

        Ok(PaginatedBooks {
            books,
            page: PageInfo::new(&pagination, total),
        })
    }

    /// Gets a book with one page of its reviews, newest first.
    ///
    /// # Returns
    /// - `Ok(BookDetail)` - The book and the requested review page
    /// - `Err(AppError::Validation)` - Page or limit out of range
    /// - `Err(AppError::NotFound)` - No book with this id
    pub async fn get_detail(
        &self,
        book_id: i32,
        pagination: Pagination,
    ) -> Result<BookDetail, AppError> {
        validate::check(&pagination)?;

        let Some(book) = BookRepository::new(self.db).get_by_id(book_id).await? else {
            return Err(AppError::NotFound("Book not found".to_string()));
        };

        let (reviews, total) = ReviewRepository::new(self.db)
            .get_paginated_by_book(book_id, &pagination)
            .await?;

        Ok(BookDetail {
            book,
            reviews,
            page: PageInfo::new(&pagination, total),
        })
    }
}
