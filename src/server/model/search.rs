use crate::{
    model::search::SearchResultDto,
    server::model::{book::Book, pagination::PageInfo},
};

/// One page of books matching a search query.
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// The trimmed query that was matched.
    pub query: String,
    pub books: Vec<Book>,
    pub page: PageInfo,
}

impl SearchResults {
    pub fn into_dto(self) -> SearchResultDto {
        SearchResultDto {
            query: self.query,
            books: self.books.into_iter().map(Book::into_dto).collect(),
            pagination: self.page.into_search_dto(),
        }
    }
}
