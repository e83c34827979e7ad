use crate::server::data::api_token::{hash_token, ApiTokenRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_user_by_token_hash;
mod hash_token;
