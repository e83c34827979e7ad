use super::*;

/// Tests resolving the user behind a valid bearer token.
///
/// Verifies that the guard hashes the presented secret and finds the token's owner.
///
/// Expected: Ok(User) for the token's owner
#[tokio::test]
async fn resolves_user_for_issued_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::api_token::create_token(db, user.id, hash_token("secret-token")).await?;

    let headers = headers_with_authorization("Bearer secret-token");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests that the scheme name is matched regardless of case.
///
/// Expected: Ok(User) for "bearer" and "BEARER"
#[tokio::test]
async fn accepts_scheme_in_any_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::api_token::create_token(db, user.id, hash_token("secret-token")).await?;

    for value in ["bearer secret-token", "BEARER secret-token"] {
        let headers = headers_with_authorization(value);
        let found = AuthGuard::new(db, &headers).require().await?;

        assert_eq!(found.id, user.id);
    }

    Ok(())
}

/// Tests that the correct user is resolved when several tokens exist.
///
/// Expected: Ok(User) matching the second token's owner
#[tokio::test]
async fn distinguishes_between_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::api_token::create_token(db, alice.id, hash_token("alice-token")).await?;
    factory::api_token::create_token(db, bob.id, hash_token("bob-token")).await?;

    let headers = headers_with_authorization("Bearer bob-token");
    let user = AuthGuard::new(db, &headers).require().await?;

    assert_eq!(user.id, bob.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_authorization_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_for_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a bearer token that was never issued.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_for_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::api_token::create_token(db, user.id, hash_token("real-token")).await?;

    let headers = headers_with_authorization("Bearer forged-token");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that the stored digest itself is not accepted as a bearer token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_stored_digest_as_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let digest = hash_token("real-token");
    factory::api_token::create_token(db, user.id, digest.clone()).await?;

    let headers = headers_with_authorization(&format!("Bearer {}", digest));
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
