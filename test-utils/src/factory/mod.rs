//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need explicitly,
//! and the helpers create whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let book = factory::book::create_book(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (owner, book, reviewer, review) =
//!         factory::helpers::create_review_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db, user.id)
//!     .title("Dune")
//!     .author("Frank Herbert")
//!     .published_year(1965)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `api_token` - Create bearer token entities for a user
//! - `book` - Create book entities
//! - `review` - Create review entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod api_token;
pub mod book;
pub mod helpers;
pub mod review;
pub mod user;

pub use api_token::create_token;
pub use book::create_book;
pub use review::create_review;
pub use user::create_user;
