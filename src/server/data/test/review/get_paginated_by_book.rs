use super::*;

/// Tests paginating a book's reviews newest first with authors expanded.
///
/// Expected: Only the book's reviews, newest first, total counted across pages
#[tokio::test]
async fn paginates_reviews_for_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, book) = factory::helpers::create_book_with_owner(db).await?;
    let other_book = factory::book::create_book(db, owner.id).await?;

    let now = Utc::now();
    let mut reviewers = Vec::new();
    for offset in 0..3 {
        let reviewer = factory::user::create_user(db).await?;
        factory::review::ReviewFactory::new(db, book.id, reviewer.id)
            .created_at(now - Duration::minutes(offset))
            .build()
            .await?;
        reviewers.push(reviewer);
    }
    factory::review::create_review(db, other_book.id, owner.id).await?;

    let repo = ReviewRepository::new(db);
    let (page1, total) = repo
        .get_paginated_by_book(book.id, &Pagination::new(Some(1), Some(2)))
        .await?;
    let (page2, _) = repo
        .get_paginated_by_book(book.id, &Pagination::new(Some(2), Some(2)))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 1);
    assert_eq!(page1[0].user.id, reviewers[0].id);
    assert_eq!(page1[0].user.username, reviewers[0].username);
    assert_eq!(page2[0].user.id, reviewers[2].id);
    assert!(page1.iter().chain(page2.iter()).all(|r| r.book_id == book.id));

    Ok(())
}
