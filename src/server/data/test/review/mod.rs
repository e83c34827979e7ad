use crate::server::{
    data::{is_unique_violation, review::ReviewRepository},
    model::{pagination::Pagination, review::CreateReviewParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists_for_book_and_user;
mod get_paginated_by_book;
mod ratings_for_book;
mod update;
