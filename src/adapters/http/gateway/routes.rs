//! Axum router configuration for the gateway endpoints.

use std::time::Duration;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::handlers::{
    calculate_signature, capture_payment, execute_action, gateway_info, health, payment_page,
    refund_payment, GatewayAppState,
};

/// Create the gateway API router.
///
/// # Routes
///
/// ## Tester Endpoints
/// - `GET /` - Shared key and field conventions
/// - `POST /` - Offsite payment page (signature verdict)
/// - `POST /incontext` - In-context payment page (signature verdict)
/// - `GET /calculator` - Signature calculator
///
/// ## Merchant Endpoints (signature verified)
/// - `POST /capture` - Capture acknowledgement
/// - `POST /refund` - Refund receipt
///
/// ## Simulation Endpoints (not verified)
/// - `POST /execute/:action` - Signed outcome with redirect or callback
pub fn gateway_routes() -> Router<GatewayAppState> {
    Router::new()
        .route("/", get(gateway_info).post(payment_page))
        .route("/incontext", post(payment_page))
        .route("/calculator", get(calculate_signature))
        .route("/capture", post(capture_payment))
        .route("/refund", post(refund_payment))
        .route("/execute/:action", post(execute_action))
}

/// Mount the gateway routes under `base_path` (empty for the root).
pub fn gateway_router(base_path: &str) -> Router<GatewayAppState> {
    let routes = Router::new().route("/healthz", get(health));
    if base_path.is_empty() {
        routes.merge(gateway_routes())
    } else {
        routes.nest(base_path, gateway_routes())
    }
}

/// Build the complete application with tracing, timeout and CORS layers.
pub fn app_router(state: GatewayAppState, server: &ServerConfig) -> Router {
    gateway_router(&server.base_path)
        .with_state(state)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}
