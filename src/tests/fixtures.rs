/// Test fixtures and helpers
use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::models::user::SignUpRequest;
use crate::security::{KeyPair, KeyStore, TokenCodec};

pub const TEST_USERNAME: &str = "testuser";
pub const TEST_PASSWORD: &str = "SecurePass123!";
pub const TEST_EMAIL: &str = "test@example.com";

static TEST_KEYS: OnceLock<Arc<KeyStore>> = OnceLock::new();
static FOREIGN_KEYS: OnceLock<Arc<KeyStore>> = OnceLock::new();

/// Process-wide signing key store; RSA generation is slow enough that tests
/// share one pair.
pub fn test_keys() -> Arc<KeyStore> {
    TEST_KEYS
        .get_or_init(|| {
            let pair = KeyPair::generate(Uuid::new_v4()).expect("generate test key pair");
            Arc::new(KeyStore::from_pair(&pair).expect("build test key store"))
        })
        .clone()
}

pub fn test_codec() -> TokenCodec {
    TokenCodec::new(test_keys())
}

/// A codec backed by a different key pair than `test_codec`, for
/// wrong-signer scenarios.
pub fn foreign_codec() -> TokenCodec {
    let keys = FOREIGN_KEYS
        .get_or_init(|| {
            let pair = KeyPair::generate(Uuid::new_v4()).expect("generate foreign key pair");
            Arc::new(KeyStore::from_pair(&pair).expect("build foreign key store"))
        })
        .clone();
    TokenCodec::new(keys)
}

pub fn valid_sign_up_request() -> SignUpRequest {
    custom_sign_up_request(TEST_USERNAME, TEST_PASSWORD, Some(TEST_EMAIL))
}

pub fn custom_sign_up_request(
    username: &str,
    password: &str,
    email: Option<&str>,
) -> SignUpRequest {
    SignUpRequest {
        username: username.to_string(),
        password: password.to_string(),
        email: email.map(str::to_string),
        full_name: None,
    }
}

/// Weak passwords for testing validation
pub fn weak_passwords() -> Vec<&'static str> {
    vec![
        "short",             // Too short
        "nouppercase123!",   // No uppercase
        "NOLOWERCASE123!",   // No lowercase
        "NoDigitsHere!",     // No digits
        "NoSpecialChars123", // No special characters
        "12345678",          // Only digits
    ]
}

/// Invalid email formats for testing
pub fn invalid_emails() -> Vec<&'static str> {
    vec![
        "not-an-email",      // Missing @
        "@example.com",      // Missing local part
        "test@",             // Missing domain
        "test @example.com", // Space in email
    ]
}
