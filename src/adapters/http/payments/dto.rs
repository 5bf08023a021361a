//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! These types define the JSON request/response structure for the payment API.
//! They serve as the boundary between HTTP and the application layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CurrencyCode, Money, OrderId, ValidationError};
use crate::domain::payments::{Order, OrderNote, OrderStatus};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to send an order through gateway checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    /// The order to pay for.
    pub order_id: u64,
}

/// Order snapshot pushed by the storefront.
///
/// The order id comes from the request path, so the body carries only
/// the order's own data.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSnapshotRequest {
    /// Order total as a decimal amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer display name (may be empty for guest checkout).
    #[serde(default)]
    pub customer_name: String,
    /// URL the gateway redirects to after payment.
    pub return_url: String,
    /// URL the gateway redirects to on cancel.
    pub cancel_url: String,
}

impl OrderSnapshotRequest {
    /// Build a validated order aggregate from the snapshot.
    pub fn into_order(self, id: OrderId) -> Result<Order, ValidationError> {
        let currency = CurrencyCode::new(self.currency)?;
        let total = Money::new(self.amount, currency)?;
        Order::new(
            id,
            total,
            self.customer_email,
            self.customer_name,
            self.return_url,
            self.cancel_url,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Detailed order view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    /// Order ID.
    pub id: u64,
    /// Current order status.
    pub status: OrderStatus,
    /// Order total amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer display name.
    pub customer_name: String,
    /// URL the gateway redirects to after payment.
    pub return_url: String,
    /// URL the gateway redirects to on cancel.
    pub cancel_url: String,
    /// Order notes, oldest first.
    pub notes: Vec<OrderNoteView>,
    /// When the order was created (ISO 8601).
    pub created_at: String,
    /// When the order last changed (ISO 8601).
    pub updated_at: String,
}

/// Single order note for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct OrderNoteView {
    /// Note text.
    pub content: String,
    /// When the note was recorded (ISO 8601).
    pub created_at: String,
}

impl From<&OrderNote> for OrderNoteView {
    fn from(note: &OrderNote) -> Self {
        Self {
            content: note.content.clone(),
            created_at: note.created_at.as_datetime().to_rfc3339(),
        }
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.value(),
            status: order.status,
            amount: order.total.amount(),
            currency: order.total.currency().as_str().to_string(),
            customer_email: order.customer_email.clone(),
            customer_name: order.customer_name.clone(),
            return_url: order.return_url.clone(),
            cancel_url: order.cancel_url.clone(),
            notes: order.notes.iter().map(OrderNoteView::from).collect(),
            created_at: order.created_at.as_datetime().to_rfc3339(),
            updated_at: order.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
