//! Review factory for creating test review entities.
//!
//! The factory only inserts the review row. It does not touch the parent book's rating
//! summary, which lets tests build reviews and then check that recomputation catches up.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    book_id: i32,
    user_id: i32,
    rating: i32,
    comment: String,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - rating: `4`
    /// - comment: `"A thoroughly enjoyable read."`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, book_id: i32, user_id: i32) -> Self {
        Self {
            db,
            book_id,
            user_id,
            rating: 4,
            comment: "A thoroughly enjoyable read.".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert (including a duplicate
    ///   book/user pair when the unique index is present)
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            book_id: ActiveValue::Set(self.book_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    book_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, book_id, user_id).build().await
}
