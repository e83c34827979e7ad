//! API token factory for creating bearer credentials in tests.
//!
//! Tokens are stored as digests, so the factory takes the already-hashed value. Tests that
//! authenticate through the HTTP layer hash their raw secret with the service's own
//! hashing function before handing it to the factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test API tokens.
pub struct ApiTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token_hash: String,
}

impl<'a> ApiTokenFactory<'a> {
    /// Creates a new ApiTokenFactory for the given user.
    ///
    /// Defaults:
    /// - token_hash: `"token_hash_{id}"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token_hash: format!("token_hash_{}", next_id()),
        }
    }

    /// Sets the stored token digest.
    pub fn token_hash(mut self, token_hash: impl Into<String>) -> Self {
        self.token_hash = token_hash.into();
        self
    }

    /// Builds and inserts the token entity into the database.
    pub async fn build(self) -> Result<entity::api_token::Model, DbErr> {
        entity::api_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token_hash: ActiveValue::Set(self.token_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a token for `user_id` with the given stored digest.
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
    token_hash: impl Into<String>,
) -> Result<entity::api_token::Model, DbErr> {
    ApiTokenFactory::new(db, user_id)
        .token_hash(token_hash)
        .build()
        .await
}
