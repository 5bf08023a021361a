//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `gateway` - Payment gateway clients (REST, mock)
//! - `http` - Axum REST API handlers and routers
//! - `notices` - Order notice sinks
//! - `orders` - Order stores

pub mod gateway;
pub mod http;
pub mod notices;
pub mod orders;

pub use gateway::{MockGatewayClient, RestGatewayClient};
pub use notices::InMemoryNoticeSink;
pub use orders::InMemoryOrderStore;
