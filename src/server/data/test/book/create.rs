use super::*;

/// Tests creating a book.
///
/// Verifies that the repository stores every field and starts the rating summary at
/// zero.
///
/// Expected: Ok with book created
#[tokio::test]
async fn creates_book_with_zeroed_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = BookRepository::new(db);
    let book = repo.create(create_params(user.id)).await?;

    assert_eq!(book.title, "Dune");
    assert_eq!(book.published_year, 1965);
    assert_eq!(book.added_by, user.id);
    assert_eq!(book.average_rating, 0.0);
    assert_eq!(book.total_reviews, 0);
    assert_eq!(book.created_at, book.updated_at);
    assert_eq!(book.title_folded, "dune");
    assert_eq!(book.author_folded, "frank herbert");
    assert_eq!(book.genre_folded, "scifi");

    let stored = entity::prelude::Book::find_by_id(book.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that the unique ISBN index rejects a second book with the same ISBN.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_isbn() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = BookRepository::new(db);

    let mut params = create_params(user.id);
    params.isbn = Some("0441172717".to_string());
    repo.create(params.clone()).await?;

    let result = repo.create(params).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests that several books may omit the ISBN.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_multiple_books_without_isbn() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = BookRepository::new(db);

    repo.create(create_params(user.id)).await?;
    let result = repo.create(create_params(user.id)).await;

    assert!(result.is_ok());

    Ok(())
}
