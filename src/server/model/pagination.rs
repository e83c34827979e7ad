//! Page-number pagination shared by book listing, book detail reviews and search.
//!
//! Pages are 1-indexed at the API and converted to SeaORM's 0-indexed pages at the
//! repository boundary.

use validator::Validate;

use crate::model::{
    book::{BookPaginationDto, ReviewPaginationDto},
    search::SearchPaginationDto,
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 50;

/// Requested page, with defaults applied but not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct Pagination {
    #[validate(range(min = 1, message = "Page must be a positive integer"))]
    pub page: u64,
    #[validate(range(min = 1, max = MAX_LIMIT, message = "Limit must be between 1 and 50"))]
    pub limit: u64,
}

impl Pagination {
    /// Applies defaults for absent values (page 1, limit 10).
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Zero-indexed page number for `Paginator::fetch_page`.
    pub fn page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// Row offset of the first item on the page.
    ///
    /// `None` when the offset does not fit the database's signed 64-bit range. Such a
    /// page lies past the end of every result set.
    pub fn offset(&self) -> Option<u64> {
        self.page_index()
            .checked_mul(self.limit)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Position of a returned page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    pub fn new(pagination: &Pagination, total: u64) -> Self {
        let total_pages = total.div_ceil(pagination.limit.max(1));

        Self {
            current_page: pagination.page,
            total_pages,
            total,
            has_next: pagination.page < total_pages,
            has_prev: pagination.page > 1,
        }
    }

    pub fn into_book_dto(self) -> BookPaginationDto {
        BookPaginationDto {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_books: self.total,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }

    pub fn into_review_dto(self) -> ReviewPaginationDto {
        ReviewPaginationDto {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_reviews: self.total,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }

    pub fn into_search_dto(self) -> SearchPaginationDto {
        SearchPaginationDto {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_results: self.total,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}
