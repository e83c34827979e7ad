//! Review domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use validator::Validate;

use crate::{
    model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    server::{error::AppError, model::user::UserSummary, util::validate},
};

/// Review with its author expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub rating: i32,
    pub comment: String,
    pub book_id: i32,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Review)` - Domain model with author expanded
    /// - `Err(DbErr::RecordNotFound)` - The author row was missing
    pub fn from_entity(
        entity: entity::review::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let user = user.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "User {} who wrote review {} not found",
                entity.user_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            rating: entity.rating,
            comment: entity.comment,
            book_id: entity.book_id,
            user: UserSummary::from_entity(user),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            rating: self.rating,
            comment: self.comment,
            book_id: self.book_id,
            user: self.user.into_dto(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Input for submitting a review on a book.
#[derive(Debug, Clone, Validate)]
pub struct SubmitReviewParams {
    pub book_id: i32,
    pub user_id: i32,
    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,
    #[validate(
        required(message = "Comment is required"),
        length(
            min = 10,
            max = 1000,
            message = "Comment must be between 10 and 1000 characters"
        )
    )]
    pub comment: Option<String>,
}

impl SubmitReviewParams {
    pub fn from_dto(book_id: i32, user_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            book_id,
            user_id,
            rating: dto.rating,
            comment: validate::non_blank(dto.comment),
        }
    }

    /// Validates rating and comment and produces insertable parameters.
    pub fn into_create_params(self) -> Result<CreateReviewParams, AppError> {
        validate::check(&self)?;

        let (Some(rating), Some(comment)) = (self.rating, self.comment) else {
            return Err(AppError::InternalError(
                "Required review field absent after validation".to_string(),
            ));
        };

        Ok(CreateReviewParams {
            book_id: self.book_id,
            user_id: self.user_id,
            rating,
            comment,
        })
    }
}

/// Validated parameters for inserting a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub book_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
}

/// Partial update of a review by its author. Absent fields are left unchanged.
///
/// A provided comment is trimmed but kept even when blank, so that clearing the comment
/// fails validation rather than being ignored.
#[derive(Debug, Clone, Validate)]
pub struct UpdateReviewParams {
    pub review_id: i32,
    pub user_id: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(
        min = 10,
        max = 1000,
        message = "Comment must be between 10 and 1000 characters"
    ))]
    pub comment: Option<String>,
}

impl UpdateReviewParams {
    pub fn from_dto(review_id: i32, user_id: i32, dto: UpdateReviewDto) -> Self {
        Self {
            review_id,
            user_id,
            rating: dto.rating,
            comment: validate::trimmed(dto.comment),
        }
    }
}
