use super::*;

/// Tests paginating 25 books ten at a time.
///
/// Verifies page sizes and that every page reports the full total.
///
/// Expected: 10, 10 and 5 books with total 25
#[tokio::test]
async fn paginates_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..25 {
        factory::book::create_book(db, user.id).await?;
    }

    let repo = BookRepository::new(db);
    let filter = BookFilter::default();

    let (page1, total) = repo
        .get_paginated(&filter, &Pagination::new(Some(1), Some(10)))
        .await?;
    let (page3, _) = repo
        .get_paginated(&filter, &Pagination::new(Some(3), Some(10)))
        .await?;
    let (page4, _) = repo
        .get_paginated(&filter, &Pagination::new(Some(4), Some(10)))
        .await?;

    assert_eq!(total, 25);
    assert_eq!(page1.len(), 10);
    assert_eq!(page3.len(), 5);
    assert!(page4.is_empty());

    Ok(())
}

/// Tests that books are returned newest first.
///
/// Expected: Books ordered by descending creation time
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    let oldest = factory::book::BookFactory::new(db, user.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::book::BookFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::book::BookFactory::new(db, user.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let (books, _) = repo
        .get_paginated(&BookFilter::default(), &Pagination::default())
        .await?;

    let ids: Vec<i32> = books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests that equal creation times fall back to descending id.
///
/// Expected: Later insert first
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    let first = factory::book::BookFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;
    let second = factory::book::BookFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let (books, _) = repo
        .get_paginated(&BookFilter::default(), &Pagination::default())
        .await?;

    assert_eq!(books[0].id, second.id);
    assert_eq!(books[1].id, first.id);

    Ok(())
}

/// Tests case-insensitive substring filters combined with AND.
///
/// Expected: Only books matching both author and genre
#[tokio::test]
async fn filters_by_author_and_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let dune = factory::book::BookFactory::new(db, user.id)
        .author("Frank Herbert")
        .genre("SciFi")
        .build()
        .await?;
    factory::book::BookFactory::new(db, user.id)
        .author("Frank Herbert")
        .genre("Essays")
        .build()
        .await?;
    factory::book::BookFactory::new(db, user.id)
        .author("Ursula K. Le Guin")
        .genre("SciFi")
        .build()
        .await?;

    let repo = BookRepository::new(db);

    let (by_author, total) = repo
        .get_paginated(
            &BookFilter::new(Some("herbert".to_string()), None),
            &Pagination::default(),
        )
        .await?;
    assert_eq!(total, 2);
    assert_eq!(by_author.len(), 2);

    let (both, total) = repo
        .get_paginated(
            &BookFilter::new(Some("HERB".to_string()), Some("scifi".to_string())),
            &Pagination::default(),
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(both[0].id, dune.id);

    Ok(())
}

/// Tests filters against non-ASCII letters and LIKE wildcards.
///
/// Expected: "ÉMILE" finds the author "Émile Zola"; "_" and "%" match nothing
#[tokio::test]
async fn filters_match_literally_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let zola = factory::book::BookFactory::new(db, user.id)
        .author("Émile Zola")
        .genre("Naturalism")
        .build()
        .await?;

    let repo = BookRepository::new(db);

    let (books, total) = repo
        .get_paginated(
            &BookFilter::new(Some("ÉMILE".to_string()), None),
            &Pagination::default(),
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(books[0].id, zola.id);

    let (_, total) = repo
        .get_paginated(
            &BookFilter::new(Some("_".to_string()), Some("%".to_string())),
            &Pagination::default(),
        )
        .await?;
    assert_eq!(total, 0);

    Ok(())
}
