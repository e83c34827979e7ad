//! SeaORM entity models for the book review service.

pub mod prelude;

pub mod api_token;
pub mod book;
pub mod review;
pub mod user;
