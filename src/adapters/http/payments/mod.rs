//! HTTP adapter for payment endpoints.
//!
//! Exposes the payments domain via REST API:
//! - `POST /api/payments/checkout` - Start hosted checkout for an order
//! - `POST /api/webhooks/gateway` - Handle gateway payment notifications
//! - `PUT /api/orders/:id` - Create or replace an order snapshot
//! - `GET /api/orders/:id` - Fetch an order with its payment status

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CheckoutRequest, ErrorResponse, OrderNoteView, OrderSnapshotRequest, OrderView,
};
pub use handlers::{PaymentsApiError, PaymentsAppState, GATEWAY_SIGNATURE_HEADER};
pub use routes::{order_routes, payment_routes, payments_router, webhook_routes};
