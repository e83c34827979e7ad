//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories borrow any `ConnectionTrait` implementor, so the same repository runs
//! against the connection pool or inside a transaction.

pub mod api_token;
pub mod book;
pub mod review;

use sea_orm::{DbErr, SqlErr};


/// Returns true if the error is a unique constraint violation reported by the database.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
