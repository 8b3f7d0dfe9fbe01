//! FieldCatalog port - Descriptions of request/response gateway fields.
//!
//! The calculator shows testers which fields a request may carry and which
//! a response will carry. The catalog is static metadata kept outside the
//! binary.

use serde_json::Value;

use crate::domain::gateway::GatewayError;

/// Port for loading field metadata.
///
/// Returns `Ok(None)` when no catalog is configured for that direction.
pub trait FieldCatalog: Send + Sync {
    fn request_fields(&self) -> Result<Option<Value>, GatewayError>;

    fn response_fields(&self) -> Result<Option<Value>, GatewayError>;
}
