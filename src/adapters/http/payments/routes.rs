//! Axum router configuration for payment endpoints.
//!
//! This module defines the route structure for payment-related API endpoints
//! and wires them to their corresponding handlers.

use axum::{
    routing::{post, put},
    Router,
};

use super::handlers::{
    create_checkout, get_order, handle_gateway_webhook, upsert_order, PaymentsAppState,
};

/// Create the payment API router.
///
/// # Routes
/// - `POST /checkout` - Start hosted checkout for an order
pub fn payment_routes() -> Router<PaymentsAppState> {
    Router::new().route("/checkout", post(create_checkout))
}

/// Create the gateway webhook router.
///
/// This is separate from the main payment routes because webhooks
/// don't carry user context (they're verified via signature).
///
/// # Routes
/// - `POST /gateway` - Handle gateway payment notifications
pub fn webhook_routes() -> Router<PaymentsAppState> {
    Router::new().route("/gateway", post(handle_gateway_webhook))
}

/// Create the order API router.
///
/// # Routes
/// - `PUT /:id` - Create or replace an order snapshot
/// - `GET /:id` - Fetch an order with its payment status
pub fn order_routes() -> Router<PaymentsAppState> {
    Router::new().route("/:id", put(upsert_order).get(get_order))
}

/// Create the complete payments module router.
///
/// Combines checkout, webhook, and order routes into a single router
/// suitable for mounting at `/api`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use crate::adapters::http::payments::{payments_router, PaymentsAppState};
///
/// let app_state = PaymentsAppState { /* ... */ };
/// let app = Router::new()
///     .nest("/api", payments_router())
///     .with_state(app_state);
/// ```
pub fn payments_router() -> Router<PaymentsAppState> {
    Router::new()
        .nest("/payments", payment_routes())
        .nest("/webhooks", webhook_routes())
        .nest("/orders", order_routes())
}
