use super::*;

/// Tests detecting an ISBN already in use.
///
/// Expected: true for the stored ISBN, false for another
#[tokio::test]
async fn detects_existing_isbn() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::book::BookFactory::new(db, user.id)
        .isbn("9780441172719")
        .build()
        .await?;

    let repo = BookRepository::new(db);

    assert!(repo.isbn_exists("9780441172719").await?);
    assert!(!repo.isbn_exists("0441172717").await?);

    Ok(())
}
