//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler covers one request from extraction to result.

pub mod handlers;

pub use handlers::gateway::{
    CalculateSignatureCommand, CalculateSignatureHandler, CalculateSignatureResult,
    CapturePaymentCommand, CapturePaymentHandler, CheckSignatureHandler, ExecuteActionCommand,
    ExecuteActionHandler, ExecuteActionResult, ExecuteResolution, RefundPaymentCommand,
    RefundPaymentHandler,
};
