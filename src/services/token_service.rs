/// Token lifecycle orchestration: sign-up, sign-in (pair issuance), access
/// token refresh, and sign-out (session denial).
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::db::{session_repo, user_repo};
use crate::error::{AuthError, Result};
use crate::models::user::SignUpRequest;
use crate::models::User;
use crate::security::{hash_password, verify_password, TokenCodec};

#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone)]
pub struct TokenService {
    db: PgPool,
    codec: TokenCodec,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    issue_cooldown: Duration,
}

impl TokenService {
    pub fn new(db: PgPool, codec: TokenCodec, config: &Config) -> Self {
        Self {
            db,
            codec,
            access_token_ttl: Duration::minutes(config.access_token_expire_minutes),
            refresh_token_ttl: Duration::days(config.refresh_token_expire_days),
            issue_cooldown: Duration::seconds(config.token_issue_cooldown_secs),
        }
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> Result<User> {
        request.validate()?;
        let password_hash = hash_password(&request.password)?;

        let user = user_repo::create_user(
            &self.db,
            &request.username,
            &password_hash,
            request.email.as_deref(),
            request.full_name.as_deref(),
        )
        .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Verify credentials, sign a token pair, and persist the refresh token
    /// as a new session.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<TokenPair> {
        let user = user_repo::get_active_user_by_username(&self.db, username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        verify_password(password, &user.password_hash)?;
        self.enforce_issue_cooldown(user.id).await?;

        let now = Utc::now();
        let refresh_expires_at = now + self.refresh_token_ttl;
        let access_expires_at = now + self.access_token_ttl;

        let refresh_token = self.codec.encode_refresh(user.id, refresh_expires_at)?;
        let access_token = self
            .codec
            .encode_access(user.id, user.role, access_expires_at)?;

        // If this insert fails the whole sign-in fails and the computed pair
        // is dropped: a token must never be handed out without its session.
        session_repo::create_session(&self.db, user.id, &refresh_token, refresh_expires_at)
            .await?;

        tracing::info!(user_id = %user.id, "user signed in");
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Re-issue an access token from a valid, non-denied refresh token.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String> {
        let payload = self.codec.decode_refresh(refresh_token)?;
        let user_id = Uuid::parse_str(&payload.sub).map_err(|_| AuthError::TokenMalformed)?;

        // Absent and denied sessions are deliberately indistinguishable to
        // the caller.
        session_repo::get_active_by_user(&self.db, user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let user = user_repo::get_active_user_by_id(&self.db, user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let access_expires_at = Utc::now() + self.access_token_ttl;
        let access_token = self
            .codec
            .encode_access(user.id, user.role, access_expires_at)?;

        tracing::info!(user_id = %user.id, "access token reissued");
        Ok(access_token)
    }

    /// Deny the subject's sessions. A missing or already-denied session is
    /// reported as `UserNotFound`, not ignored: repeated sign-out stays
    /// observably distinct as an anti-replay signal.
    pub async fn sign_out(&self, refresh_token: &str) -> Result<()> {
        let payload = self.codec.decode_refresh(refresh_token)?;
        let user_id = Uuid::parse_str(&payload.sub).map_err(|_| AuthError::TokenMalformed)?;

        session_repo::get_active_by_user(&self.db, user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        session_repo::deny_sessions(&self.db, user_id).await?;

        tracing::info!(user_id = %user_id, "sessions denied");
        Ok(())
    }

    async fn enforce_issue_cooldown(&self, user_id: Uuid) -> Result<()> {
        if self.issue_cooldown <= Duration::zero() {
            return Ok(());
        }

        if let Some(last_issued) = session_repo::latest_issuance(&self.db, user_id).await? {
            if within_cooldown(last_issued, Utc::now(), self.issue_cooldown) {
                tracing::warn!(user_id = %user_id, "token pair issuance throttled");
                return Err(AuthError::TooManyRequests);
            }
        }

        Ok(())
    }
}

pub(crate) fn within_cooldown(
    last_issued: DateTime<Utc>,
    now: DateTime<Utc>,
    window: Duration,
) -> bool {
    now - last_issued < window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuance_inside_window_is_throttled() {
        let now = Utc::now();
        assert!(within_cooldown(
            now - Duration::seconds(30),
            now,
            Duration::seconds(60)
        ));
    }

    #[test]
    fn issuance_at_window_boundary_is_allowed() {
        let now = Utc::now();
        assert!(!within_cooldown(
            now - Duration::seconds(60),
            now,
            Duration::seconds(60)
        ));
    }

    #[test]
    fn issuance_outside_window_is_allowed() {
        let now = Utc::now();
        assert!(!within_cooldown(
            now - Duration::minutes(5),
            now,
            Duration::seconds(60)
        ));
    }
}
