//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a book added by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, book))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::book::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let book = crate::factory::book::create_book(db, user.id).await?;

    Ok((user, book))
}

/// Creates a complete review hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (book owner)
/// 2. Book
/// 3. User (reviewer)
/// 4. Review
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, book, reviewer, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::book::Model,
        entity::user::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let (owner, book) = create_book_with_owner(db).await?;
    let reviewer = crate::factory::user::create_user(db).await?;
    let review = crate::factory::review::create_review(db, book.id, reviewer.id).await?;

    Ok((owner, book, reviewer, review))
}
