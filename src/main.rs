//! Payrail service binary.
//!
//! Loads configuration, wires adapters into the payment routes, and
//! serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use secrecy::ExposeSecret;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payrail::adapters::gateway::RestGatewayClient;
use payrail::adapters::http::payments::{payments_router, PaymentsAppState};
use payrail::adapters::notices::InMemoryNoticeSink;
use payrail::adapters::orders::InMemoryOrderStore;
use payrail::config::AppConfig;
use payrail::domain::payments::WebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    tracing::info!(
        environment = ?config.server.environment,
        test_mode = config.gateway.test_mode,
        "Configuration loaded"
    );

    if !config.gateway.enabled {
        tracing::warn!("Payment gateway is disabled; checkout requests will fail fast");
    }

    let gateway_client = RestGatewayClient::new(&config.gateway)?;
    let webhook_verifier =
        WebhookVerifier::new(config.gateway.api_secret.expose_secret().as_str());

    let state = PaymentsAppState {
        order_store: Arc::new(InMemoryOrderStore::new()),
        gateway_client: Arc::new(gateway_client),
        notice_sink: Arc::new(InMemoryNoticeSink::new()),
        webhook_verifier: Arc::new(webhook_verifier),
        gateway_enabled: config.gateway.enabled,
    };

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", payments_router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Payrail listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "payrail",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
