//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `OFFSITE_GATEWAY` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so the simulator starts with an empty environment
//! and signs with the well-known development key.
//!
//! # Example
//!
//! ```no_run
//! use offsite_gateway_sim::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod callback;
mod error;
mod gateway;
mod server;

pub use callback::CallbackConfig;
pub use error::{ConfigError, ValidationError};
pub use gateway::{GatewayConfig, DEFAULT_SIGNING_KEY};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, base path)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gateway protocol configuration (signing key, field catalog)
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Merchant callback delivery configuration
    #[serde(default)]
    pub callback: CallbackConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `OFFSITE_GATEWAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `OFFSITE_GATEWAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `OFFSITE_GATEWAY__GATEWAY__SIGNING_KEY=...` -> `gateway.signing_key = ...`
    /// - `OFFSITE_GATEWAY__CALLBACK__TIMEOUT_SECS=5` -> `callback.timeout_secs = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("OFFSITE_GATEWAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The callback timeout must be strictly shorter than the request
    /// timeout so execute always answers with its own envelope.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.gateway.validate()?;
        self.callback.validate()?;

        if self.callback.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::CallbackOutlastsRequest {
                callback_secs: self.callback.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
