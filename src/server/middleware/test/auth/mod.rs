use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    data::api_token::hash_token,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

/// Builds headers carrying the given `Authorization` value.
fn headers_with_authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
