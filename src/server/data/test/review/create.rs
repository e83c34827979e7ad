use super::*;

/// Tests creating a review.
///
/// Expected: Ok with review created for the given book and user
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, book) = factory::helpers::create_book_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            book_id: book.id,
            user_id: reviewer.id,
            rating: 4,
            comment: "Sprawling and strange.".to_string(),
        })
        .await?;

    assert_eq!(review.book_id, book.id);
    assert_eq!(review.user_id, reviewer.id);
    assert_eq!(review.rating, 4);

    Ok(())
}

/// Tests that the unique index rejects a second review by the same user.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn rejects_second_review_by_same_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, book, reviewer, _review) =
        factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            book_id: book.id,
            user_id: reviewer.id,
            rating: 2,
            comment: "Changed my mind entirely.".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
