/// Authentication handlers
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

use super::{required_header, ACCESS_TOKEN_HEADER, REFRESH_TOKEN_HEADER};
use crate::error::Result;
use crate::models::user::{SignInRequest, SignUpRequest, UserResponse};
use crate::security::{AccessTokenPayload, RefreshTokenPayload};
use crate::services::TokenPair;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = state.tokens.sign_up(request).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<(StatusCode, Json<TokenPair>)> {
    let pair = state
        .tokens
        .sign_in(&request.username, &request.password)
        .await?;
    Ok((StatusCode::CREATED, Json(pair)))
}

pub async fn refresh_access_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccessTokenResponse>> {
    let refresh_token = required_header(&headers, REFRESH_TOKEN_HEADER)?;
    let access_token = state.tokens.refresh_access_token(refresh_token).await?;
    Ok(Json(AccessTokenResponse { access_token }))
}

pub async fn sign_out(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode> {
    let refresh_token = required_header(&headers, REFRESH_TOKEN_HEADER)?;
    state.tokens.sign_out(refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Decode-only check of a presented access token; no session cross-check.
pub async fn validate_access_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccessTokenPayload>> {
    let token = required_header(&headers, ACCESS_TOKEN_HEADER)?;
    let payload = state.codec.decode_access(token)?;
    Ok(Json(payload))
}

/// Decode-only check of a presented refresh token; no session cross-check.
pub async fn validate_refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshTokenPayload>> {
    let token = required_header(&headers, REFRESH_TOKEN_HEADER)?;
    let payload = state.codec.decode_refresh(token)?;
    Ok(Json(payload))
}
