use std::env;

use chrono::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_TTL_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub session: SessionConfig,
}

/// Everything needed to sign, verify and hand out session cookies.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl: Duration,
    pub secure_cookie: bool,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        match env::var(key) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::Missing(key)),
        }
    }

    fn parse_env<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value: raw }),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let ttl_secs: i64 = Self::parse_env("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        if ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }

        Ok(EnvConfig {
            port: Self::parse_env("PORT", DEFAULT_PORT)?,
            db_url: Self::get_env("DATABASE_URL")?,
            session: SessionConfig {
                secret: Self::get_env("SESSION_SECRET")?,
                ttl: Duration::seconds(ttl_secs),
                secure_cookie: Self::parse_env("COOKIE_SECURE", false)?,
            },
        })
    }
}
