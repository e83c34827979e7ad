use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User reference embedded in books and reviews.
///
/// `email` is only populated in the response to adding a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
