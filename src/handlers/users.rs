/// User read handlers
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use super::{required_header, ACCESS_TOKEN_HEADER};
use crate::db::user_repo;
use crate::error::{AuthError, Result};
use crate::models::user::UserResponse;
use crate::models::UserRole;
use crate::AppState;

pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>> {
    let token = required_header(&headers, ACCESS_TOKEN_HEADER)?;
    let principal = state.gate.authenticate(token, &[])?;

    let user = user_repo::get_active_user_by_id(&state.db, principal.user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    Ok(Json(user.into()))
}

pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserResponse>>> {
    let token = required_header(&headers, ACCESS_TOKEN_HEADER)?;
    state
        .gate
        .authenticate(token, &[UserRole::Admin, UserRole::SuperAdmin])?;

    let users = user_repo::list_users(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
