//! Payment gateway client port.
//!
//! Defines the contract for talking to the external hosted-checkout
//! gateway. Implementations handle endpoint selection, transport, and
//! response interpretation.
//!
//! # Design
//!
//! - **Two-step protocol**: authentication and session creation are
//!   separate calls so each failure surfaces its own diagnostic and
//!   each can grow independent retry policy later
//! - **No token caching**: callers authenticate per payment attempt;
//!   tokens returned here are used immediately and discarded

use async_trait::async_trait;

use crate::domain::payments::{
    AuthError, AuthToken, GatewayError, PaymentRequest, PaymentSessionResult,
};

/// Port for the external payment gateway.
#[async_trait]
pub trait PaymentGatewayClient: Send + Sync {
    /// Obtains an access token via the client-credentials grant.
    ///
    /// Selects the test or live authentication endpoint according to
    /// the client's configured environment.
    async fn authenticate(&self) -> Result<AuthToken, AuthError>;

    /// Creates a hosted checkout session for the given request.
    ///
    /// The token must come from [`authenticate`] on the same client so
    /// the environment of token and endpoint always match. A gateway
    /// refusal is reported as `Ok(PaymentSessionResult::Failure)`;
    /// transport and parse faults are `Err(GatewayError)`.
    ///
    /// [`authenticate`]: PaymentGatewayClient::authenticate
    async fn create_session(
        &self,
        token: &AuthToken,
        request: &PaymentRequest,
    ) -> Result<PaymentSessionResult, GatewayError>;
}
