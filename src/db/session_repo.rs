/// Session registry: exclusive owner of jwt_sessions rows.
///
/// Rows are never deleted; denial and read-time expiry are the only terminal
/// states.
use crate::error::{AuthError, Result};
use crate::models::Session;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_session(
    pool: &PgPool,
    user_id: Uuid,
    refresh_token: &str,
    expires_at: DateTime<Utc>,
) -> Result<Session> {
    let session = sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO jwt_sessions (id, user_id, refresh_token, expires_at, is_denied, created_at, updated_at)
        VALUES (gen_random_uuid(), $1, $2, $3, false, now(), now())
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(refresh_token)
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.to_string().contains("unique constraint") {
            AuthError::DuplicateToken
        } else {
            AuthError::Database(e.to_string())
        }
    })?;

    Ok(session)
}

/// Most recent non-denied, unexpired session for a user.
pub async fn get_active_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Session>> {
    let session = sqlx::query_as::<_, Session>(
        r#"
        SELECT * FROM jwt_sessions
        WHERE user_id = $1 AND is_denied = false AND expires_at > now()
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// Deny all of a user's sessions. Idempotent: already-denied rows are left
/// untouched.
pub async fn deny_sessions(pool: &PgPool, user_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE jwt_sessions
        SET is_denied = true, updated_at = now()
        WHERE user_id = $1 AND is_denied = false
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Newest issuance timestamp for a user, regardless of session state. Feeds
/// the token-pair issuance cooldown.
pub async fn latest_issuance(pool: &PgPool, user_id: Uuid) -> Result<Option<DateTime<Utc>>> {
    let created_at: Option<DateTime<Utc>> = sqlx::query_scalar(
        r#"
        SELECT MAX(created_at) FROM jwt_sessions WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(created_at)
}
