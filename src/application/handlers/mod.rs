//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod payments;

pub use payments::{
    ProcessPaymentCommand, ProcessPaymentHandler, ReconcileResult, ReconcileWebhookCommand,
    ReconcileWebhookHandler,
};
