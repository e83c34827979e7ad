use super::*;

/// Tests overwriting a book's rating summary.
///
/// Expected: Stored average and count replaced
#[tokio::test]
async fn overwrites_summary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let book = factory::book::BookFactory::new(db, user.id)
        .rating_summary(1.0, 7)
        .build()
        .await?;

    let repo = BookRepository::new(db);
    repo.update_rating_summary(
        book.id,
        &RatingSummary {
            average: 3.5,
            count: 2,
        },
    )
    .await?;

    let stored = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.average_rating, 3.5);
    assert_eq!(stored.total_reviews, 2);

    Ok(())
}

/// Tests updating the summary of a missing book.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo
        .update_rating_summary(
            42,
            &RatingSummary {
                average: 0.0,
                count: 0,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
