//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the gateway domain and the outside world. Adapters implement these ports.
//!
//! - `CallbackDispatcher` - Outbound merchant callback delivery
//! - `ReferenceGenerator` - Random gateway references
//! - `Clock` - Current UTC time
//! - `FieldCatalog` - Field metadata for the signature calculator

mod callback_dispatcher;
mod clock;
mod field_catalog;
mod reference_generator;

pub use callback_dispatcher::{CallbackDispatcher, CallbackFailure, DeliveryOutcome};
pub use clock::Clock;
pub use field_catalog::FieldCatalog;
pub use reference_generator::ReferenceGenerator;
