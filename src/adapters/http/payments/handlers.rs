//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payments::{
    ProcessPaymentCommand, ProcessPaymentHandler, ReconcileWebhookCommand,
    ReconcileWebhookHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, OrderId};
use crate::domain::payments::{PaymentOutcome, WebhookVerifier};
use crate::ports::{NoticeSink, OrderStore, PaymentGatewayClient};

use super::dto::{CheckoutRequest, ErrorResponse, OrderSnapshotRequest, OrderView};

/// Header carrying the HMAC digest of the webhook body.
pub const GATEWAY_SIGNATURE_HEADER: &str = "X-Gateway-Signature";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct PaymentsAppState {
    pub order_store: Arc<dyn OrderStore>,
    pub gateway_client: Arc<dyn PaymentGatewayClient>,
    pub notice_sink: Arc<dyn NoticeSink>,
    pub webhook_verifier: Arc<WebhookVerifier>,
    /// Whether the gateway is enabled for this deployment. When false,
    /// checkout requests fail fast without contacting the gateway.
    pub gateway_enabled: bool,
}

impl PaymentsAppState {
    /// Create handlers on demand from the shared state.
    pub fn process_payment_handler(&self) -> ProcessPaymentHandler {
        ProcessPaymentHandler::new(
            self.order_store.clone(),
            self.gateway_client.clone(),
            self.notice_sink.clone(),
        )
    }

    pub fn reconcile_webhook_handler(&self) -> ReconcileWebhookHandler {
        ReconcileWebhookHandler::new(self.order_store.clone(), self.webhook_verifier.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Checkout Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payments/checkout - Start hosted checkout for an order
///
/// Always answers 200 with `{"result", "redirect"}`. The storefront
/// branches on `result`, so failures are data, not HTTP errors.
pub async fn create_checkout(
    State(state): State<PaymentsAppState>,
    Json(request): Json<CheckoutRequest>,
) -> Json<PaymentOutcome> {
    if !state.gateway_enabled {
        tracing::warn!(
            order_id = request.order_id,
            "Checkout requested while gateway is disabled"
        );
        return Json(PaymentOutcome::fail());
    }

    let handler = state.process_payment_handler();
    let cmd = ProcessPaymentCommand {
        order_id: OrderId::new(request.order_id),
    };

    Json(handler.handle(cmd).await)
}

// ════════════════════════════════════════════════════════════════════════════════
// Webhook Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks/gateway - Handle gateway payment notifications
///
/// Responds with plain text acknowledgment bodies. Non-2xx statuses
/// signal the gateway's retry machinery: 4xx rejections are final,
/// 5xx responses will be redelivered.
pub async fn handle_gateway_webhook(
    State(state): State<PaymentsAppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> impl IntoResponse {
    // A missing header fails verification the same way a wrong one does
    let signature = headers
        .get(GATEWAY_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let handler = state.reconcile_webhook_handler();
    let cmd = ReconcileWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    match handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, "Webhook processed"),
        Err(e) => (e.status_code(), e.response_body()),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Order Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/orders/:id - Create or replace an order snapshot
pub async fn upsert_order(
    State(state): State<PaymentsAppState>,
    Path(id): Path<u64>,
    Json(request): Json<OrderSnapshotRequest>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let order = request
        .into_order(OrderId::new(id))
        .map_err(|e| DomainError::new(ErrorCode::ValidationFailed, e.to_string()))?;

    let view = OrderView::from(&order);
    state.order_store.upsert(order).await?;

    Ok(Json(view))
}

/// GET /api/orders/:id - Fetch an order with its payment status
pub async fn get_order(
    State(state): State<PaymentsAppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let order_id = OrderId::new(id);
    let order = state
        .order_store
        .find(order_id)
        .await?
        .ok_or_else(|| DomainError::order_not_found(order_id))?;

    Ok(Json(OrderView::from(&order)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
pub struct PaymentsApiError(DomainError);

impl From<DomainError> for PaymentsApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentsApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::OrderNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
            ErrorCode::StoreError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = if self.0.details.is_empty() {
            ErrorResponse::new(self.0.code.to_string(), self.0.message)
        } else {
            ErrorResponse::with_details(
                self.0.code.to_string(),
                self.0.message,
                serde_json::json!(self.0.details),
            )
        };
        (status, Json(body)).into_response()
    }
}
