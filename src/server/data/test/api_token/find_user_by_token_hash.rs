use super::*;

/// Tests finding the owner of a stored token digest.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_owner_of_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::api_token::create_token(db, user.id, hash_token("s3cret")).await?;

    let repo = ApiTokenRepository::new(db);
    let result = repo.find_user_by_token_hash(&hash_token("s3cret")).await?;

    assert_eq!(result.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests looking up a digest no token was issued for.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_digest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiTokenRepository::new(db);
    let result = repo.find_user_by_token_hash(&hash_token("nope")).await?;

    assert!(result.is_none());

    Ok(())
}
