/// HTTP request handlers (REST API)
use axum::http::HeaderMap;

use crate::error::{AuthError, Result};

pub mod auth;
pub mod users;

/// Access tokens and refresh tokens travel in dedicated headers; the core
/// never assumes a transport beyond these handlers.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

fn required_header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredential(name))
}
