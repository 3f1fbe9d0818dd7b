use axum::http::{HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, TOKEN_HEADER},
    model::auth::Role,
    util::jwt::JwtKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn headers_with(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
    headers
}
