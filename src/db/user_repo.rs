use crate::error::{AuthError, Result};
use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new user with the default role
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    email: Option<&str>,
    full_name: Option<&str>,
) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, email, full_name, role, is_active, created_at, updated_at)
        VALUES (gen_random_uuid(), $1, $2, $3, $4, 'STAFF', true, now(), now())
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(full_name)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.to_string().contains("unique constraint") {
            AuthError::UserAlreadyExists
        } else {
            AuthError::Database(e.to_string())
        }
    })?;

    Ok(user)
}

/// Get an active user by username
pub async fn get_active_user_by_username(pool: &PgPool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users WHERE username = $1 AND is_active = true
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get an active user by ID
pub async fn get_active_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users WHERE id = $1 AND is_active = true
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List all users
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}
