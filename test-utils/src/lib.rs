//! Book Review Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the book
//! review service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and the schema the tests need.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, tokens, books and reviews with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_book_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_review_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, book) = factory::helpers::create_book_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
