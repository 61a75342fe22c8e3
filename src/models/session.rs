/// Session model: one revocable record per issued refresh token
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub is_denied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Expiry is evaluated at read time; there is no background sweep.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// A session authorizes refresh only while non-denied and unexpired.
    pub fn is_active(&self) -> bool {
        !self.is_denied && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>, is_denied: bool) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            refresh_token: "token".to_string(),
            expires_at,
            is_denied,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn fresh_session_is_active() {
        let s = session(Utc::now() + Duration::days(30), false);
        assert!(s.is_active());
        assert!(!s.is_expired());
    }

    #[test]
    fn denied_session_is_not_active() {
        let s = session(Utc::now() + Duration::days(30), true);
        assert!(!s.is_active());
        assert!(!s.is_expired());
    }

    #[test]
    fn past_expiry_is_terminal() {
        let s = session(Utc::now() - Duration::seconds(1), false);
        assert!(s.is_expired());
        assert!(!s.is_active());
    }

    #[test]
    fn denied_and_expired_is_not_active() {
        let s = session(Utc::now() - Duration::days(1), true);
        assert!(!s.is_active());
    }
}
