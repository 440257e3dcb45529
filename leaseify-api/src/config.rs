//! API Configuration Module
//!
//! Configuration is loaded from environment variables with sensible
//! defaults for development. The runtime mode gates error-body stack
//! elision and strict CORS.

use once_cell::sync::Lazy;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4100);

/// Runtime mode, gating stack traces in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// Read the mode from `LEASEIFY_MODE`; anything other than
    /// "production" is development.
    pub fn from_env() -> Self {
        match std::env::var("LEASEIFY_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("production") => RuntimeMode::Production,
            _ => RuntimeMode::Development,
        }
    }
}

static RUNTIME_MODE: Lazy<RuntimeMode> = Lazy::new(RuntimeMode::from_env);

/// The process-wide runtime mode, read once from the environment.
pub fn runtime_mode() -> RuntimeMode {
    *RUNTIME_MODE
}

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for binding, CORS, and runtime mode.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Runtime mode (production elides stack traces from error bodies).
    pub mode: RuntimeMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            cors_origins: Vec::new(), // Empty = allow all
            mode: RuntimeMode::Development,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `LEASEIFY_BIND_ADDR`: socket address to bind (default: 127.0.0.1:4100)
    /// - `LEASEIFY_CORS_ORIGINS`: comma-separated allowed origins (empty = allow all)
    /// - `LEASEIFY_MODE`: "production" or anything else for development
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("LEASEIFY_BIND_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_BIND_ADDR);

        let cors_origins = std::env::var("LEASEIFY_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            bind_addr,
            cors_origins,
            mode: RuntimeMode::from_env(),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.mode == RuntimeMode::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.mode, RuntimeMode::Development);
        assert!(!config.is_production());
    }

    #[test]
    fn test_is_production() {
        let mut config = ApiConfig::default();
        config.mode = RuntimeMode::Production;
        assert!(config.is_production());
    }
}
