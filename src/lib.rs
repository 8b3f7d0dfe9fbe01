//! Offsite Gateway Sim - Offsite payment gateway simulator
//!
//! This crate accepts HMAC-signed payment requests, verifies them, and for
//! execute actions builds a signed outcome that is redirected to the merchant
//! and optionally delivered to a merchant callback endpoint.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
