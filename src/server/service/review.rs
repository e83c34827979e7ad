use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{book::BookRepository, is_unique_violation, review::ReviewRepository},
    error::{auth::AuthError, AppError},
    model::review::{Review, SubmitReviewParams, UpdateReviewParams},
    service::rating::RatingAggregator,
    util::validate,
};

const DUPLICATE_REVIEW: &str = "You have already reviewed this book";

/// Review mutations.
///
/// Each mutation runs in a transaction together with the rating recomputation it
/// triggers, so a book's stored summary never disagrees with its committed reviews.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits the authenticated user's review of a book.
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review with its author expanded
    /// - `Err(AppError::Validation)` - Rating or comment invalid
    /// - `Err(AppError::NotFound)` - No book with this id
    /// - `Err(AppError::Conflict)` - The user already reviewed this book
    pub async fn submit(&self, params: SubmitReviewParams) -> Result<Review, AppError> {
        let params = params.into_create_params()?;
        let (book_id, user_id) = (params.book_id, params.user_id);

        let txn = self.db.begin().await?;
        let books = BookRepository::new(&txn);
        let reviews = ReviewRepository::new(&txn);

        if !books.exists(book_id).await? {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        if reviews.exists_for_book_and_user(book_id, user_id).await? {
            return Err(AppError::Conflict(DUPLICATE_REVIEW.to_string()));
        }

        let review = reviews.create(params).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(DUPLICATE_REVIEW.to_string())
            } else {
                e.into()
            }
        })?;

        RatingAggregator::new(books, ReviewRepository::new(&txn))
            .recompute(book_id)
            .await?;

        let review = reviews.get_by_id(review.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Review {} not found after creation", review.id))
        })?;

        txn.commit().await?;

        tracing::info!(review_id = review.id, book_id, user_id, "Review submitted");

        Ok(review)
    }

    /// Applies a partial update to a review owned by the authenticated user.
    ///
    /// # Returns
    /// - `Ok(Review)` - The updated review
    /// - `Err(AppError::NotFound)` - No review with this id
    /// - `Err(AppError::AuthErr(AccessDenied))` - The review belongs to another user
    /// - `Err(AppError::Validation)` - A provided field is invalid
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Review, AppError> {
        let txn = self.db.begin().await?;
        let reviews = ReviewRepository::new(&txn);

        let Some(review) = reviews.find_by_id(params.review_id).await? else {
            return Err(AppError::NotFound("Review not found".to_string()));
        };

        if review.user_id != params.user_id {
            return Err(AuthError::AccessDenied(
                params.user_id,
                "You can only update your own reviews".to_string(),
            )
            .into());
        }

        validate::check(&params)?;

        let book_id = review.book_id;
        let review = reviews
            .update(review, params.rating, params.comment)
            .await?;

        RatingAggregator::new(BookRepository::new(&txn), ReviewRepository::new(&txn))
            .recompute(book_id)
            .await?;

        let review = reviews.get_by_id(review.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Review {} not found after update", review.id))
        })?;

        txn.commit().await?;

        tracing::info!(review_id = review.id, book_id, "Review updated");

        Ok(review)
    }

    /// Deletes a review owned by the authenticated user.
    ///
    /// # Returns
    /// - `Ok(())` - Review deleted and the book's rating recomputed
    /// - `Err(AppError::NotFound)` - No review with this id
    /// - `Err(AppError::AuthErr(AccessDenied))` - The review belongs to another user
    pub async fn delete(&self, review_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let reviews = ReviewRepository::new(&txn);

        let Some(review) = reviews.find_by_id(review_id).await? else {
            return Err(AppError::NotFound("Review not found".to_string()));
        };

        if review.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                "You can only delete your own reviews".to_string(),
            )
            .into());
        }

        reviews.delete(review.id).await?;

        RatingAggregator::new(BookRepository::new(&txn), ReviewRepository::new(&txn))
            .recompute(review.book_id)
            .await?;

        txn.commit().await?;

        tracing::info!(review_id, book_id = review.book_id, "Review deleted");

        Ok(())
    }
}
