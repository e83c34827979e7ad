use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

/// Request body for `POST /books/{id}/reviews`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Request body for `PUT /reviews/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewDto {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub rating: i32,
    pub comment: String,
    pub book_id: i32,
    pub user: UserSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response to creating or updating a review.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewMessageDto {
    pub message: String,
    pub review: ReviewDto,
}
