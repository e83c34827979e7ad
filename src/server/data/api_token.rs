use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use sha2::{Digest, Sha256};

/// Hashes a raw bearer secret into the hex digest stored in `api_token.token_hash`.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

pub struct ApiTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApiTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves the user owning the token with the given digest.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Token is issued and its owner exists
    /// - `Ok(None)` - No token with this digest
    /// - `Err(DbErr)` - Database error
    pub async fn find_user_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let result = entity::prelude::ApiToken::find()
            .filter(entity::api_token::Column::TokenHash.eq(token_hash))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user))
    }
}
