/// Security module: key management, token codec, password hashing, and the
/// request-time authentication gate.
pub mod auth_gate;
pub mod jwt;
pub mod keys;
pub mod password;

pub use auth_gate::{AuthGate, Principal};
pub use jwt::{AccessTokenPayload, RefreshTokenPayload, TokenCodec};
pub use keys::{KeyPair, KeyStore};
pub use password::{hash_password, verify_password};
