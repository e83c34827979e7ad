use super::*;

/// Tests detecting an existing review for a book and user pair.
///
/// Expected: true for the reviewer, false for another user
#[tokio::test]
async fn detects_existing_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, book, reviewer, _review) =
        factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.exists_for_book_and_user(book.id, reviewer.id).await?);
    assert!(!repo.exists_for_book_and_user(book.id, owner.id).await?);

    Ok(())
}
