use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::api_token::{hash_token, ApiTokenRepository},
    error::{auth::AuthError, AppError},
};

const BEARER_SCHEME: &str = "Bearer";

/// Resolves the authenticated user of a request from its bearer token.
///
/// Tokens are issued by the identity provider, which stores their SHA-256 digest. The
/// guard hashes the presented secret and looks the digest up.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(user)` - The user owning the presented token
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token not issued
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let token_repo = ApiTokenRepository::new(self.db);

        let Some(user) = token_repo.find_user_by_token_hash(&hash_token(token)).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}

/// Extracts the secret from an `Authorization: Bearer <token>` header.
///
/// The scheme name is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let (scheme, token) = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .trim_start()
        .split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    Some(token.trim()).filter(|token| !token.is_empty())
}
