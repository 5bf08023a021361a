//! Payments domain module.
//!
//! Handles hosted checkout orchestration and gateway webhook
//! reconciliation for storefront orders.
//!
//! # Module Structure
//!
//! - `order` - Order aggregate entity
//! - `status` - OrderStatus state machine
//! - `payment` - Gateway session request and checkout outcome types
//! - `webhook` - Gateway notification parsing
//! - `webhook_verifier` - HMAC-SHA256 signature verification
//! - `errors` - Stage-specific error types

mod errors;
mod order;
mod payment;
mod status;
mod webhook;
mod webhook_verifier;

pub use errors::{AuthError, GatewayError, OrchestrationError, ReconciliationError};
pub use order::{Order, OrderNote, StatusTransition};
pub use payment::{
    AuthToken, CheckoutResult, PaymentOutcome, PaymentRequest, PaymentSessionResult,
};
pub use status::OrderStatus;
pub use webhook::{NotificationStatus, WebhookNotification};
pub use webhook_verifier::WebhookVerifier;
