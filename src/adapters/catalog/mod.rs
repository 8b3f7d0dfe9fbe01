//! YAML-backed field catalog.
//!
//! Files are re-read on every call so testers can edit the field lists
//! without restarting the simulator.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::gateway::GatewayError;
use crate::ports::FieldCatalog;

/// Field catalog loaded from optional request/response YAML files.
#[derive(Debug, Clone, Default)]
pub struct YamlFieldCatalog {
    request_path: Option<PathBuf>,
    response_path: Option<PathBuf>,
}

impl YamlFieldCatalog {
    pub fn new(request_path: Option<PathBuf>, response_path: Option<PathBuf>) -> Self {
        Self {
            request_path,
            response_path,
        }
    }

    fn load(path: Option<&Path>) -> Result<Option<Value>, GatewayError> {
        let Some(path) = path else {
            return Ok(None);
        };

        let raw = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to read field catalog");
            GatewayError::catalog(format!("{}: {}", path.display(), e))
        })?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&raw)
            .map_err(|e| GatewayError::catalog(format!("{}: {}", path.display(), e)))?;
        let json = serde_json::to_value(yaml)
            .map_err(|e| GatewayError::catalog(format!("{}: {}", path.display(), e)))?;

        Ok(Some(json))
    }
}

impl FieldCatalog for YamlFieldCatalog {
    fn request_fields(&self) -> Result<Option<Value>, GatewayError> {
        Self::load(self.request_path.as_deref())
    }

    fn response_fields(&self) -> Result<Option<Value>, GatewayError> {
        Self::load(self.response_path.as_deref())
    }
}
