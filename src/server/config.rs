//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub static DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub static DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub static DEFAULT_GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub static DEFAULT_GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub static DEFAULT_GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Process configuration, constructed once at startup and passed down explicitly.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub valkey_url: String,
    pub frontend_url: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,
    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,
    /// Crime type suggestions are disabled when no key is configured
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = optional_var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid_value("BIND_ADDR", e))?;

        Ok(Self {
            bind_addr,
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            frontend_url: required_var("FRONTEND_URL")?,
            google_client_id: required_var("GOOGLE_CLIENT_ID")?,
            google_client_secret: required_var("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: required_var("GOOGLE_REDIRECT_URL")?,
            google_auth_url: optional_var("GOOGLE_AUTH_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_AUTH_URL.to_string()),
            google_token_url: optional_var("GOOGLE_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_TOKEN_URL.to_string()),
            google_userinfo_url: optional_var("GOOGLE_USERINFO_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_USERINFO_URL.to_string()),
            openai_api_key: optional_var("OPENAI_API_KEY"),
            openai_base_url: optional_var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank variables are both treated as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
