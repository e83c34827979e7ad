//! Domain models and operation parameters.
//!
//! Repositories convert entities into these models at the data boundary, services work
//! exclusively with them, and controllers convert them into DTOs for responses.

pub mod book;
pub mod pagination;
pub mod rating;
pub mod review;
pub mod search;
pub mod user;
