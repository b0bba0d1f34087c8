//! Configuration for the Paycek API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use paycek_crypto::Credentials;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::time::Duration;

/// Default API host
pub const DEFAULT_API_HOST: &str = "https://paycek.io";

/// Default path prefix of the processing API
pub const DEFAULT_API_PREFIX: &str = "/processing/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// API key identifier
    pub api_key: String,
    /// Shared API secret
    pub api_secret: String,
    /// Scheme and host, without a trailing slash
    #[serde(default = "default_host")]
    pub api_host: String,
    /// Path prefix put in front of every endpoint
    #[serde(default = "default_prefix")]
    pub api_prefix: String,
    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,
    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_user_agent() -> String {
    concat!("paycek-api-client/", env!("CARGO_PKG_VERSION")).to_string()
}

mod duration_secs {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("api_prefix", &self.api_prefix)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create configuration for the given credentials with default host and prefix
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_host: default_host(),
            api_prefix: default_prefix(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `PAYCEK_API_KEY`: API key identifier (required)
    /// - `PAYCEK_API_SECRET`: API secret (required)
    /// - `PAYCEK_API_HOST`: Scheme and host (default `https://paycek.io`)
    /// - `PAYCEK_API_PREFIX`: Path prefix (default `/processing/api`)
    /// - `PAYCEK_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable lookup
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let api_key = lookup("PAYCEK_API_KEY").ok_or_else(|| ApiError::missing_env("PAYCEK_API_KEY"))?;
        let api_secret =
            lookup("PAYCEK_API_SECRET").ok_or_else(|| ApiError::missing_env("PAYCEK_API_SECRET"))?;

        let mut config = Self::new(api_key, api_secret);

        if let Some(host) = lookup("PAYCEK_API_HOST") {
            config = config.with_host(host);
        }
        if let Some(prefix) = lookup("PAYCEK_API_PREFIX") {
            config = config.with_prefix(prefix);
        }
        if let Some(timeout) = lookup("PAYCEK_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            config = config.with_timeout(Duration::from_secs(timeout));
        }

        Ok(config)
    }

    /// Builder-style method to set the host
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder-style method to set the path prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the User-Agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Credentials for signing and verification
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone(), self.api_secret.clone())
    }

    /// Path that is signed for `endpoint`, e.g. `/processing/api/payment/get`
    #[must_use]
    pub fn endpoint_path(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_prefix, endpoint.trim_start_matches('/'))
    }

    /// Absolute URL for `endpoint`
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_host, self.endpoint_path(endpoint))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.api_key.is_empty() {
            return Err(ApiError::config("api_key cannot be empty"));
        }

        if self.api_secret.is_empty() {
            return Err(ApiError::config("api_secret cannot be empty"));
        }

        if !self.api_host.starts_with("http://") && !self.api_host.starts_with("https://") {
            return Err(ApiError::config("api_host must start with http:// or https://"));
        }

        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ApiError::config("api_prefix must be empty or start with /"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
