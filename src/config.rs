// src/config.rs
use crate::errors::{RelayError, Result};

/// Where the external execution backend lives.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub api_base: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub bind_addr: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables. Every variable has a
    /// default, so this only fails on a malformed value.
    pub fn from_env() -> Result<Self> {
        let api_base = std::env::var("PISTON_API_URL")
            .unwrap_or_else(|_| "https://emkc.org/api/v2/piston".to_string());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                RelayError::Config(format!("PORT must be a number between 1 and 65535, got '{}'", raw))
            })?,
            Err(_) => 8080,
        };

        Ok(AppConfig {
            backend: BackendConfig { api_base },
            bind_addr,
            port,
        })
    }
}
