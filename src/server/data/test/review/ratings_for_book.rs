use super::*;

/// Tests collecting every rating of a book.
///
/// Expected: Ratings of the book only
#[tokio::test]
async fn collects_ratings_of_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, book) = factory::helpers::create_book_with_owner(db).await?;
    let other_book = factory::book::create_book(db, owner.id).await?;

    for rating in [5, 2] {
        let reviewer = factory::user::create_user(db).await?;
        factory::review::ReviewFactory::new(db, book.id, reviewer.id)
            .rating(rating)
            .build()
            .await?;
    }
    factory::review::ReviewFactory::new(db, other_book.id, owner.id)
        .rating(1)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let mut ratings = repo.ratings_for_book(book.id).await?;
    ratings.sort();

    assert_eq!(ratings, vec![2, 5]);

    Ok(())
}

/// Tests a book without reviews.
///
/// Expected: Empty list
#[tokio::test]
async fn returns_empty_for_unreviewed_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, book) = factory::helpers::create_book_with_owner(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.ratings_for_book(book.id).await?.is_empty());

    Ok(())
}
