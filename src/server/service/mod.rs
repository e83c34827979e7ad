//! Business logic layer.
//!
//! Services validate operation parameters, orchestrate repositories and translate data
//! layer outcomes into `AppError` variants. Controllers construct a service per request
//! from the shared connection pool.

pub mod book;
pub mod rating;
pub mod review;
pub mod search;
