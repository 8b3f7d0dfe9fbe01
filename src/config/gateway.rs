//! Gateway protocol configuration

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::gateway::SigningKey;

/// Shared key the simulator signs and verifies with unless overridden.
pub const DEFAULT_SIGNING_KEY: &str = "iU44RWxeik";

/// Gateway configuration (signing key, calculator catalog)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Shared HMAC key for every protected endpoint
    #[serde(default = "default_signing_key")]
    pub signing_key: SecretString,

    /// YAML file describing request fields (calculator)
    pub request_fields_path: Option<PathBuf>,

    /// YAML file describing response fields (calculator)
    pub response_fields_path: Option<PathBuf>,
}

impl GatewayConfig {
    /// Key injected into handlers at startup.
    pub fn signing_key(&self) -> SigningKey {
        SigningKey::from(self.signing_key.clone())
    }

    /// Check whether the well-known default key is still in use
    pub fn uses_default_key(&self) -> bool {
        self.signing_key.expose_secret() == DEFAULT_SIGNING_KEY
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.signing_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__SIGNING_KEY"));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            signing_key: default_signing_key(),
            request_fields_path: None,
            response_fields_path: None,
        }
    }
}

fn default_signing_key() -> SecretString {
    SecretString::new(DEFAULT_SIGNING_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        let config = GatewayConfig::default();
        assert!(config.uses_default_key());
        assert_eq!(config.signing_key().expose(), DEFAULT_SIGNING_KEY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_key() {
        let config = GatewayConfig {
            signing_key: SecretString::new(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_key() {
        let config = GatewayConfig {
            signing_key: SecretString::new("merchant-key".to_string()),
            ..Default::default()
        };
        assert!(!config.uses_default_key());
        assert_eq!(config.signing_key().expose(), "merchant-key");
    }
}
