//! Domain layer - the gateway signing protocol.

pub mod gateway;
