//! Gateway HTTP adapter - the thin transport in front of the gateway handlers.

mod dto;
mod extract;
mod handlers;
mod routes;

pub use dto::{
    CalculatorResponse, ErrorResponse, ExecuteResponse, GatewayInfoResponse,
    SignatureCheckResponse, SignatureFailureResponse,
};
pub use extract::{GatewayRequest, FIRE_CALLBACK_PARAM, SECRET_KEY_PARAM};
pub use handlers::{GatewayApiError, GatewayAppState};
pub use routes::{app_router, gateway_router, gateway_routes};
