//! Payment handlers.
//!
//! Command handlers for the hosted checkout lifecycle:
//!
//! ## Commands
//! - Sending an order through hosted checkout
//! - Reconciling gateway webhook notifications

mod process_payment;
mod reconcile_webhook;

pub use process_payment::{
    ProcessPaymentCommand, ProcessPaymentHandler, NOTE_AWAITING_CONFIRMATION, NOTICE_AUTH_FAILED,
    NOTICE_CONNECTION_ERROR, NOTICE_GATEWAY_ERROR,
};
pub use reconcile_webhook::{
    ReconcileResult, ReconcileWebhookCommand, ReconcileWebhookHandler, NOTE_PAYMENT_FAILED,
};
