/// Token codec: RS256 encode/decode of access and refresh payloads.
///
/// RS256 only. Asymmetric signing lets any number of stateless verifiers
/// validate tokens from the published public key while only the issuing
/// process holds the private key.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuthError, Result};
use crate::models::UserRole;
use crate::security::keys::KeyStore;

const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// Wire payload of an access token: `{sub, role, exp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenPayload {
    pub sub: String,
    pub role: UserRole,
    pub exp: i64,
}

/// Wire payload of a refresh token: `{sub, exp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshTokenPayload {
    pub sub: String,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenCodec {
    keys: Arc<KeyStore>,
}

impl TokenCodec {
    pub fn new(keys: Arc<KeyStore>) -> Self {
        Self { keys }
    }

    pub fn encode_access(
        &self,
        user_id: Uuid,
        role: UserRole,
        expires_at: DateTime<Utc>,
    ) -> Result<String> {
        let payload = AccessTokenPayload {
            sub: user_id.to_string(),
            role,
            exp: expires_at.timestamp(),
        };
        Ok(encode(
            &Header::new(JWT_ALGORITHM),
            &payload,
            self.keys.encoding_key()?,
        )?)
    }

    pub fn encode_refresh(&self, user_id: Uuid, expires_at: DateTime<Utc>) -> Result<String> {
        let payload = RefreshTokenPayload {
            sub: user_id.to_string(),
            exp: expires_at.timestamp(),
        };
        Ok(encode(
            &Header::new(JWT_ALGORITHM),
            &payload,
            self.keys.encoding_key()?,
        )?)
    }

    pub fn decode_access(&self, token: &str) -> Result<AccessTokenPayload> {
        let payload: AccessTokenPayload = self.decode(token)?;
        check_expiry(payload.exp)?;
        Ok(payload)
    }

    pub fn decode_refresh(&self, token: &str) -> Result<RefreshTokenPayload> {
        let payload: RefreshTokenPayload = self.decode(token)?;
        check_expiry(payload.exp)?;
        Ok(payload)
    }

    fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = 0;

        let data = decode::<T>(token, self.keys.decoding_key(), &validation)?;
        Ok(data.claims)
    }
}

// Second-granularity unix timestamps; a token whose expiry equals the current
// second is already expired.
fn check_expiry(exp: i64) -> Result<()> {
    if exp <= Utc::now().timestamp() {
        return Err(AuthError::TokenExpired);
    }
    Ok(())
}
