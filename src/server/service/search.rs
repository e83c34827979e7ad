use sea_orm::DatabaseConnection;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::{
        pagination::{PageInfo, Pagination},
        search::SearchResults,
    },
    util::validate,
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds books whose title or author contains the query, ignoring case.
    ///
    /// # Returns
    /// - `Ok(SearchResults)` - The requested page of matches
    /// - `Err(AppError::Validation)` - Query blank, or page/limit out of range
    pub async fn search(
        &self,
        query: Option<String>,
        pagination: Pagination,
    ) -> Result<SearchResults, AppError> {
        let query = validate::non_blank(query);
        let mut errors = validate::validation_errors(&pagination);

        if query.is_none() {
            errors.add(
                "q",
                validate::error("required", "Search query is required"),
            );
        }
        validate::finish(errors)?;

        let query = query.unwrap_or_default();
        let (books, total) = BookRepository::new(self.db)
            .search_paginated(&query, &pagination)
            .await?;

        Ok(SearchResults {
            query,
            books,
            page: PageInfo::new(&pagination, total),
        })
    }
}
