/// Configuration management
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    pub database_url: String,
    pub redis_url: String,
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,
    #[serde(default = "default_refresh_token_expire_days")]
    pub refresh_token_expire_days: i64,
    /// Fixed identifier the public key is published under.
    #[serde(default = "default_public_key_id")]
    pub public_key_id: Uuid,
    /// Minimum seconds between token-pair issuances per subject. 0 disables
    /// the cooldown (a per-subject window also blocks second-device sign-in).
    #[serde(default)]
    pub token_issue_cooldown_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_access_token_expire_minutes() -> i64 {
    30
}

fn default_refresh_token_expire_days() -> i64 {
    30
}

fn default_public_key_id() -> Uuid {
    Uuid::from_u128(0x7ca648c4_0507_41b0_84db_0b1a0030dba4)
}
