//! Payment gateway adapter.
//!
//! Implements the `PaymentGatewayClient` port for the hosted payment
//! gateway, including:
//! - Client-credentials authentication
//! - Hosted checkout session creation
//! - Test and live endpoint routing
//!
//! # Security
//!
//! - Merchant credentials are handled via `secrecy::SecretString`
//! - Credentials travel only as HTTP Basic auth over the token endpoint
//! - Access tokens are requested per attempt and never cached

mod mock_client;
mod rest_client;

pub use mock_client::MockGatewayClient;
pub use rest_client::{GatewayEndpoints, RestGatewayClient};
