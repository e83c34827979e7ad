use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{book::BookRepository, review::ReviewRepository},
    model::rating::RatingSummary,
};

/// Keeps a book's stored rating summary consistent with its reviews.
///
/// Every recomputation rescans all of the book's ratings; the stored summary is never
/// patched incrementally. Callers run it on the same connection (usually a transaction)
/// as the review mutation that triggered it.
pub struct RatingAggregator<'a, C: ConnectionTrait> {
    books: BookRepository<'a, C>,
    reviews: ReviewRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> RatingAggregator<'a, C> {
    pub fn new(books: BookRepository<'a, C>, reviews: ReviewRepository<'a, C>) -> Self {
        Self { books, reviews }
    }

    /// Recomputes and stores the average rating and review count of a book.
    ///
    /// # Returns
    /// - `Ok(RatingSummary)` - The summary now stored on the book
    /// - `Err(DbErr::RecordNotUpdated)` - The book does not exist
    /// - `Err(DbErr)` - Other database error
    pub async fn recompute(&self, book_id: i32) -> Result<RatingSummary, DbErr> {
        let ratings = self.reviews.ratings_for_book(book_id).await?;
        let summary = RatingSummary::from_ratings(&ratings);

        self.books.update_rating_summary(book_id, &summary).await?;

        tracing::debug!(
            book_id,
            average = summary.average,
            count = summary.count,
            "Recomputed book rating"
        );

        Ok(summary)
    }
}
