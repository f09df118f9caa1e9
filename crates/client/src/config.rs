//! Client configuration.

use std::time::Duration;

use crate::error::ClientError;

pub const API_URL_VAR: &str = "SOLOBILL_API_URL";
pub const AUTH_TOKEN_VAR: &str = "SOLOBILL_AUTH_TOKEN";
pub const TIMEOUT_VAR: &str = "SOLOBILL_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:5000`.
    pub api_url: String,
    /// Optional bearer token forwarded on every request.
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `SOLOBILL_API_URL`, `SOLOBILL_AUTH_TOKEN` and
    /// `SOLOBILL_HTTP_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config =
            Self::new(non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()));

        if let Some(token) = non_empty(AUTH_TOKEN_VAR) {
            config = config.with_token(token.trim());
        }

        if let Some(raw) = non_empty(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                ClientError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds: {e}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
