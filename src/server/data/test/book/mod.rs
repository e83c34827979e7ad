use crate::server::{
    data::{book::BookRepository, is_unique_violation},
    model::{
        book::{BookFilter, CreateBookParams},
        pagination::Pagination,
        rating::RatingSummary,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_paginated;
mod isbn_exists;
mod update_rating_summary;

/// Builds valid insert parameters for a book owned by `added_by`.
fn create_params(added_by: i32) -> CreateBookParams {
    CreateBookParams {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        genre: "SciFi".to_string(),
        description: "Politics and spice on a desert planet.".to_string(),
        published_year: 1965,
        isbn: None,
        added_by,
    }
}
