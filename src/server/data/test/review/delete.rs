use super::*;

/// Tests deleting a review.
///
/// Expected: Review no longer in the database
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _book, _reviewer, review) =
        factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    repo.delete(review.id).await?;

    let stored = entity::prelude::Review::find_by_id(review.id).one(db).await?;
    assert!(stored.is_none());
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}
