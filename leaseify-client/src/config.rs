//! Configuration loading for the Leaseify client.

use crate::error::ClientError;

/// Client configuration: where the API lives and how long to wait.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout_ms: 10_000,
        }
    }

    /// Load from environment variables:
    /// - `LEASEIFY_API_BASE_URL` (required)
    /// - `LEASEIFY_REQUEST_TIMEOUT_MS` (default: 10000)
    pub fn from_env() -> Result<Self, ClientError> {
        let api_base_url = std::env::var("LEASEIFY_API_BASE_URL")
            .map_err(|_| ClientError::Config("LEASEIFY_API_BASE_URL is required".to_string()))?;

        let request_timeout_ms = std::env::var("LEASEIFY_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10_000);

        let config = Self {
            api_base_url,
            request_timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ClientError::Config(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(ClientError::Config(
                "request_timeout_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
