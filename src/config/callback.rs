//! Callback delivery configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::callback::HttpCallbackConfig;

/// Outbound merchant callback configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackConfig {
    /// Upper bound for one callback attempt, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent to merchants
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl CallbackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Settings for the HTTP dispatcher adapter
    pub fn http_config(&self) -> HttpCallbackConfig {
        HttpCallbackConfig::default()
            .with_timeout(self.timeout())
            .with_user_agent(self.user_agent.clone())
    }

    /// Validate callback configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidCallbackTimeout);
        }
        Ok(())
    }
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("offsite-gateway-sim/", env!("CARGO_PKG_VERSION")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CallbackConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_timeout_bounds() {
        for timeout_secs in [0, 121] {
            let config = CallbackConfig {
                timeout_secs,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_http_config_carries_settings() {
        let config = CallbackConfig {
            timeout_secs: 3,
            user_agent: "merchant-tests".to_string(),
        };
        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(3));
        assert_eq!(http.user_agent, "merchant-tests");
    }
}
