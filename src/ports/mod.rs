//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Gateway Ports
//!
//! - `PaymentGatewayClient` - Authentication and checkout session creation
//!
//! ## Persistence Ports
//!
//! - `OrderStore` - Order lookup and status transitions
//!
//! ## Presentation Ports
//!
//! - `NoticeSink` - Customer-facing checkout error notices

mod gateway_client;
mod notice_sink;
mod order_store;

pub use gateway_client::PaymentGatewayClient;
pub use notice_sink::NoticeSink;
pub use order_store::OrderStore;
