use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Refresh token already registered")]
    DuplicateToken,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token decode error")]
    TokenMalformed,

    #[error("Header {0} is not provided")]
    MissingCredential(&'static str),

    #[error("Operation not permitted")]
    Forbidden,

    #[error("Too many token requests")]
    TooManyRequests,

    #[error("Password is too weak")]
    WeakPassword,

    #[error("Signing key is unavailable")]
    KeyUnavailable,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Redis error: {0}")]
    Redis(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AuthError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AuthError::InvalidPassword
            | AuthError::WeakPassword
            | AuthError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::TokenExpired
            | AuthError::TokenMalformed
            | AuthError::MissingCredential(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            AuthError::TooManyRequests => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AuthError::UserAlreadyExists | AuthError::DuplicateToken => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AuthError::KeyUnavailable
            | AuthError::Database(_)
            | AuthError::Redis(_)
            | AuthError::Internal(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Database(err.to_string())
    }
}

impl From<redis::RedisError> for AuthError {
    fn from(err: redis::RedisError) -> Self {
        AuthError::Redis(err.to_string())
    }
}

// Decode failures are collapsed into the Expired/Malformed split only; wrong
// signature, wrong algorithm, and unparseable structure are deliberately
// indistinguishable to the caller.
impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenMalformed,
        }
    }
}

impl From<validator::ValidationErrors> for AuthError {
    fn from(err: validator::ValidationErrors) -> Self {
        AuthError::Validation(err.to_string())
    }
}
