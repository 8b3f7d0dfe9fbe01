//! Application handlers.
//!
//! Command handlers that orchestrate gateway domain operations.

pub mod gateway;
