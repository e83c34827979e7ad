use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::book::BookDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_results: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Response for `GET /search`, echoing the trimmed query.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub query: String,
    pub books: Vec<BookDto>,
    pub pagination: SearchPaginationDto,
}
