//! Data transfer objects shared between the HTTP API and its clients.
//!
//! Every DTO serializes with camelCase field names and derives `ToSchema` so it appears
//! in the generated OpenAPI document.

pub mod api;
pub mod book;
pub mod review;
pub mod search;
pub mod user;
