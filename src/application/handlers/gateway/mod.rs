//! Gateway handlers - one per simulated endpoint.

mod calculate_signature;
mod capture_payment;
mod check_signature;
mod execute_action;
mod refund_payment;

pub use calculate_signature::{
    CalculateSignatureCommand, CalculateSignatureHandler, CalculateSignatureResult,
};
pub use capture_payment::{CapturePaymentCommand, CapturePaymentHandler};
pub use check_signature::CheckSignatureHandler;
pub use execute_action::{
    ExecuteActionCommand, ExecuteActionHandler, ExecuteActionResult, ExecuteResolution,
};
pub use refund_payment::{RefundPaymentCommand, RefundPaymentHandler};
