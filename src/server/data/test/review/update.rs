use super::*;

/// Tests updating only the rating.
///
/// Expected: Rating changed, comment kept, updated_at advanced
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, book) = factory::helpers::create_book_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;
    let review = factory::review::ReviewFactory::new(db, book.id, reviewer.id)
        .rating(3)
        .comment("Original comment text.")
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo.update(review.clone(), Some(5), None).await?;

    assert_eq!(updated.rating, 5);
    assert_eq!(updated.comment, "Original comment text.");
    assert!(updated.updated_at > review.updated_at);

    Ok(())
}

/// Tests updating only the comment.
///
/// Expected: Comment changed, rating kept
#[tokio::test]
async fn updates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _book, _reviewer, review) =
        factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(review.clone(), None, Some("A completely new take.".to_string()))
        .await?;

    assert_eq!(updated.rating, review.rating);
    assert_eq!(updated.comment, "A completely new take.");

    Ok(())
}
