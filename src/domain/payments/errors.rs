//! Error types for gateway interaction and webhook reconciliation.
//!
//! Split by pipeline stage so authentication failures, session creation
//! failures, and webhook processing failures each surface their own
//! diagnostics, transience semantics, and HTTP status mapping.

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::{DomainError, OrderId};

use super::OrderStatus;

/// Errors that occur while obtaining an access token from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The HTTP client reported a network-level failure.
    #[error("Authentication transport failure: {0}")]
    TransportFailure(String),

    /// The gateway answered, but without a usable access token.
    #[error("Authentication response invalid: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Returns true if a retry of the same request could plausibly succeed.
    ///
    /// Network-level failures are transient; a response that parses but
    /// carries no token indicates misconfiguration and will not heal on
    /// its own.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::TransportFailure(_))
    }
}

/// Errors that occur while creating a hosted checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The HTTP client reported a network-level failure.
    #[error("Checkout transport failure: {0}")]
    TransportFailure(String),

    /// The gateway accepted the request but the response body lacked
    /// the checkout URL field or was not parseable.
    #[error("Checkout response malformed: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Returns true if a retry of the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, GatewayError::TransportFailure(_))
    }
}

/// Errors that occur during webhook notification processing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReconciliationError {
    /// The raw payload was not valid JSON of the expected shape.
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(String),

    /// Signature verification failed.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The notification references an order this store does not know.
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    /// The notification asks for a terminal status that conflicts with
    /// a different settled status already recorded for the order.
    #[error("Order {order_id} is {current:?}, cannot apply {requested:?}")]
    ConflictingStatus {
        order_id: OrderId,
        current: OrderStatus,
        requested: OrderStatus,
    },

    /// The order store failed while reading or writing the order.
    #[error("Order store failure: {0}")]
    StoreFailure(#[from] DomainError),
}

impl ReconciliationError {
    /// Maps the error to the HTTP status returned to the gateway.
    ///
    /// Status codes determine the gateway's retry behavior:
    /// - 2xx: acknowledged, no retry
    /// - 4xx: rejected as invalid, no retry
    /// - 5xx: server fault, the gateway will retry
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReconciliationError::MalformedPayload(_) | ReconciliationError::InvalidSignature => {
                StatusCode::BAD_REQUEST
            }
            ReconciliationError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            ReconciliationError::ConflictingStatus { .. } => StatusCode::CONFLICT,
            ReconciliationError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain text acknowledgment body paired with [`status_code`].
    ///
    /// [`status_code`]: ReconciliationError::status_code
    pub fn response_body(&self) -> &'static str {
        match self {
            ReconciliationError::MalformedPayload(_) => "Invalid payload",
            ReconciliationError::InvalidSignature => "Invalid signature",
            ReconciliationError::OrderNotFound(_) => "Order not found",
            ReconciliationError::ConflictingStatus { .. } => "Conflicting order state",
            ReconciliationError::StoreFailure(_) => "Webhook processing failed",
        }
    }
}

/// Errors internal to checkout orchestration.
///
/// These never cross the payment boundary: the orchestrator converts
/// them into a fail outcome before returning to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrchestrationError {
    /// The order to pay for does not exist in the order store.
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    /// The order store failed while loading the order.
    #[error("Order store failure: {0}")]
    StoreFailure(#[from] DomainError),
}
