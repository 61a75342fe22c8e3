// Keystone Auth Service Library

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod security;
pub mod services;

#[cfg(test)]
pub mod tests;

pub use error::{AuthError, Result};

use security::{AuthGate, TokenCodec};
use services::TokenService;

/// Shared application state, constructed once at startup. No hidden global
/// singletons: every collaborator is injected here.
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub codec: TokenCodec,
    pub gate: AuthGate,
    pub tokens: TokenService,
}
