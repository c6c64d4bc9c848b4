use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub media_base_url: String,
    /// Allowance for the posts fetch; the whole feed load depends on it.
    pub posts_timeout: Duration,
    /// Allowance for a single per-post comment fetch; failures degrade.
    pub comments_timeout: Duration,
    pub auth_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer for {0}: {1}")]
    InvalidNumber(&'static str, String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = read_string("TRABAHANAP_API_BASE_URL", "http://127.0.0.1:4000");
        if api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("TRABAHANAP_API_BASE_URL", api_base_url));
        }
        let media_base_url = read_string("TRABAHANAP_MEDIA_BASE_URL", "http://127.0.0.1:4000");
        if media_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "TRABAHANAP_MEDIA_BASE_URL",
                media_base_url,
            ));
        }
        let posts_timeout_secs = read_u64("TRABAHANAP_POSTS_TIMEOUT_SECS", 20)?;
        let comments_timeout_secs = read_u64("TRABAHANAP_COMMENTS_TIMEOUT_SECS", 10)?;
        let auth_token = read_optional_string("TRABAHANAP_AUTH_TOKEN");

        Ok(Self {
            api_base_url,
            media_base_url,
            posts_timeout: Duration::from_secs(posts_timeout_secs),
            comments_timeout: Duration::from_secs(comments_timeout_secs),
            auth_token,
        })
    }
}

fn read_string(key: &'static str, default: &'static str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn read_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|_| ConfigError::InvalidNumber(key, raw))
}

fn read_optional_string(key: &'static str) -> Option<String> {
    let value = std::env::var(key).unwrap_or_default();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
