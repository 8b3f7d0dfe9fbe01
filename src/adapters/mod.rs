//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the gateway domain to external systems:
//! - `http` - Axum transport for the simulated endpoints
//! - `callback` - Merchant callback delivery (reqwest, mock)
//! - `reference` - Gateway reference generation (OS CSPRNG, sequence)
//! - `clock` - Wall clock (system, fixed)
//! - `catalog` - YAML field catalog for the signature calculator

pub mod callback;
pub mod catalog;
pub mod clock;
pub mod http;
pub mod reference;

pub use callback::{HttpCallbackConfig, HttpCallbackDispatcher, MockCallbackDispatcher};
pub use catalog::YamlFieldCatalog;
pub use clock::{FixedClock, SystemClock};
pub use reference::{OsReferenceGenerator, SequenceReferenceGenerator};
