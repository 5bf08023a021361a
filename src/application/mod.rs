//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers receive commands from the HTTP adapters, drive the domain, and
//! talk to the outside world only through port traits.

pub mod handlers;

pub use handlers::{
    // Payment handlers
    ProcessPaymentCommand, ProcessPaymentHandler,
    ReconcileResult, ReconcileWebhookCommand, ReconcileWebhookHandler,
};
