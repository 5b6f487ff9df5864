use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:7000";
const DEFAULT_BCRYPT_COST: u32 = 12;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_origin: Option<String>,

    pub bcrypt_cost: u32,
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|o| !o.is_empty()),
            bcrypt_cost: parse_optional("BCRYPT_COST")?.unwrap_or(DEFAULT_BCRYPT_COST),
            session_secure: parse_optional("SESSION_SECURE")?.unwrap_or(false),
        })
    }
}

/// Reads an optional environment variable and parses it.
///
/// # Returns
/// - `Ok(None)` - Variable not set
/// - `Ok(Some(value))` - Variable set and parsed
/// - `Err(ConfigError::InvalidEnvVar)` - Variable set but unparseable
fn parse_optional<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw,
        })
}
