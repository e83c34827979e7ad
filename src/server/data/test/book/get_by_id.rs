use super::*;

/// Tests getting a book with its owner expanded.
///
/// Expected: Ok(Some(book)) with added_by populated from the user row
#[tokio::test]
async fn gets_book_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("paul")
        .email("paul@arrakis.test")
        .build()
        .await?;
    let book = factory::book::create_book(db, user.id).await?;

    let repo = BookRepository::new(db);
    let result = repo.get_by_id(book.id).await?;

    let found = result.expect("book should exist");
    assert_eq!(found.id, book.id);
    assert_eq!(found.added_by.id, user.id);
    assert_eq!(found.added_by.username, "paul");
    assert_eq!(found.added_by.email, "paul@arrakis.test");

    Ok(())
}

/// Tests getting a book that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
