//! HTTP request handlers.
//!
//! Controllers authenticate the caller where required, convert request DTOs into
//! operation parameters, call a service and convert the result into a response DTO.

pub mod book;
pub mod health;
pub mod review;
pub mod search;
