use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use offsite_gateway_sim::adapters::http::{app_router, GatewayAppState};
use offsite_gateway_sim::adapters::{
    HttpCallbackDispatcher, OsReferenceGenerator, SystemClock, YamlFieldCatalog,
};
use offsite_gateway_sim::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("invalid configuration")?;

    if config.gateway.uses_default_key() {
        tracing::warn!("Signing with the built-in development key");
    }

    let callback_dispatcher = HttpCallbackDispatcher::new(config.callback.http_config())
        .context("failed to build callback HTTP client")?;

    let state = GatewayAppState {
        signing_key: config.gateway.signing_key(),
        reference_generator: Arc::new(OsReferenceGenerator),
        clock: Arc::new(SystemClock),
        callback_dispatcher: Arc::new(callback_dispatcher),
        field_catalog: Arc::new(YamlFieldCatalog::new(
            config.gateway.request_fields_path.clone(),
            config.gateway.response_fields_path.clone(),
        )),
    };

    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        %addr,
        base_path = %config.server.base_path,
        callback_timeout_secs = config.callback.timeout_secs,
        "Offsite gateway simulator listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
