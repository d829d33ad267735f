use axum::http::{header, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{authenticate, AuthGuard, Permission},
    service::token::TokenService,
};

mod authenticate;
mod require;

fn tokens() -> TokenService {
    TokenService::new("middleware-test-secret", 3600)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
