/// Keystone Auth Service - Main entry point
use axum::{
    routing::{get, post},
    Router,
};
use redis::aio::ConnectionManager;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use keystone_auth::{
    config::Config,
    handlers::{auth, users},
    security::{AuthGate, KeyStore, TokenCodec},
    services::TokenService,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        "Starting keystone-auth on {}:{}",
        config.server_host,
        config.server_port
    );

    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&db_pool).await?;

    tracing::info!("Database connection pool initialized");

    let redis_client = redis::Client::open(config.redis_url.clone())?;
    let redis_conn = ConnectionManager::new(redis_client).await?;

    tracing::info!("Redis connection initialized");

    // The public key must be durably published before the listener binds and
    // any token is issued.
    let keys = Arc::new(KeyStore::initialize(&redis_conn, config.public_key_id).await?);

    let codec = TokenCodec::new(keys);
    let gate = AuthGate::new(codec.clone());
    let tokens = TokenService::new(db_pool.clone(), codec.clone(), &config);

    let app_state = AppState {
        db: db_pool,
        codec,
        gate,
        tokens,
    };

    let router = Router::new()
        .route("/api/v1/auth/sign-up", post(auth::sign_up))
        .route("/api/v1/auth/sign-in", post(auth::sign_in))
        .route("/api/v1/auth/refresh", post(auth::refresh_access_token))
        .route("/api/v1/auth/sign-out", post(auth::sign_out))
        .route("/api/v1/auth/validate-access", get(auth::validate_access_token))
        .route("/api/v1/auth/validate-refresh", get(auth::validate_refresh_token))
        .route("/api/v1/users/me", get(users::current_user))
        .route("/api/v1/users", get(users::list_users))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("REST API listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
