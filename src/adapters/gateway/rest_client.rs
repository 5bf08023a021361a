//! REST payment gateway adapter.
//!
//! Implements the `PaymentGatewayClient` port against the gateway's HTTP API.
//! Every payment attempt authenticates first, then opens a hosted checkout
//! session with the token it just obtained. Tokens are never cached.
//!
//! # Endpoints
//!
//! Test and live modes route to distinct endpoint pairs. Explicit URL
//! overrides in configuration take precedence over both, which is how tests
//! point the client at a local server.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::domain::payments::{
    AuthError, AuthToken, GatewayError, PaymentRequest, PaymentSessionResult,
};
use crate::ports::PaymentGatewayClient;

/// Live mode authentication endpoint.
const LIVE_AUTH_URL: &str = "https://api.payment-gateway.com/auth";

/// Live mode checkout session endpoint.
const LIVE_CHECKOUT_URL: &str = "https://api.payment-gateway.com/checkout";

/// Test mode authentication endpoint.
const TEST_AUTH_URL: &str = "https://test-api.payment-gateway.com/auth";

/// Test mode checkout session endpoint.
const TEST_CHECKOUT_URL: &str = "https://test-api.payment-gateway.com/checkout";

/// Resolved endpoint pair for one gateway environment.
///
/// Test and live credentials are only valid against their matching pair, so
/// both URLs always resolve together from the same mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayEndpoints {
    /// Token endpoint.
    pub auth_url: String,

    /// Hosted checkout session endpoint.
    pub checkout_url: String,
}

impl GatewayEndpoints {
    /// Endpoints for live payments.
    pub fn live() -> Self {
        Self {
            auth_url: LIVE_AUTH_URL.to_string(),
            checkout_url: LIVE_CHECKOUT_URL.to_string(),
        }
    }

    /// Endpoints for test payments.
    pub fn test() -> Self {
        Self {
            auth_url: TEST_AUTH_URL.to_string(),
            checkout_url: TEST_CHECKOUT_URL.to_string(),
        }
    }

    /// Resolve endpoints for a configuration.
    ///
    /// Per-URL overrides win over the mode defaults.
    pub fn for_config(config: &GatewayConfig) -> Self {
        let defaults = if config.is_test_mode() {
            Self::test()
        } else {
            Self::live()
        };

        Self {
            auth_url: config.auth_url.clone().unwrap_or(defaults.auth_url),
            checkout_url: config.checkout_url.clone().unwrap_or(defaults.checkout_url),
        }
    }
}

/// Successful authentication response body.
#[derive(Deserialize)]
struct AuthResponse {
    access_token: String,
}

/// Successful checkout session response body.
#[derive(Deserialize)]
struct CheckoutResponse {
    checkout_url: String,
}

/// Error response body shape the gateway uses for refusals.
#[derive(Deserialize)]
struct GatewayErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// REST payment gateway client.
///
/// Implements `PaymentGatewayClient` over HTTP with credentials and
/// endpoints taken from [`GatewayConfig`].
pub struct RestGatewayClient {
    api_key: SecretString,
    api_secret: SecretString,
    endpoints: GatewayEndpoints,
    http_client: reqwest::Client,
}

impl RestGatewayClient {
    /// Create a new client from gateway configuration.
    ///
    /// The HTTP client carries the configured request timeout, so neither
    /// authentication nor session creation can hang a checkout forever.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            endpoints: GatewayEndpoints::for_config(config),
            http_client,
        })
    }

    /// The endpoint pair this client talks to.
    pub fn endpoints(&self) -> &GatewayEndpoints {
        &self.endpoints
    }
}

#[async_trait]
impl PaymentGatewayClient for RestGatewayClient {
    async fn authenticate(&self) -> Result<AuthToken, AuthError> {
        let response = self
            .http_client
            .post(&self.endpoints.auth_url)
            .basic_auth(
                self.api_key.expose_secret(),
                Some(self.api_secret.expose_secret()),
            )
            .json(&serde_json::json!({ "grant_type": "client_credentials" }))
            .send()
            .await
            .map_err(|e| AuthError::TransportFailure(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::TransportFailure(e.to_string()))?;

        interpret_auth_response(status, &body)
    }

    async fn create_session(
        &self,
        token: &AuthToken,
        request: &PaymentRequest,
    ) -> Result<PaymentSessionResult, GatewayError> {
        let response = self
            .http_client
            .post(&self.endpoints.checkout_url)
            .bearer_auth(token.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::TransportFailure(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::TransportFailure(e.to_string()))?;

        interpret_checkout_response(status, &body)
    }
}

/// Interpret an authentication response.
///
/// Authentication succeeds only when the status is 2xx AND the body carries
/// a non-empty `access_token`. A token inside a non-2xx body is ignored.
fn interpret_auth_response(
    status: reqwest::StatusCode,
    body: &[u8],
) -> Result<AuthToken, AuthError> {
    if !status.is_success() {
        tracing::warn!(status = %status, "Gateway authentication rejected");
        return Err(AuthError::InvalidResponse(format!(
            "authentication returned {}",
            status
        )));
    }

    let parsed: AuthResponse = serde_json::from_slice(body)
        .map_err(|e| AuthError::InvalidResponse(format!("invalid JSON: {}", e)))?;

    if parsed.access_token.is_empty() {
        return Err(AuthError::InvalidResponse(
            "empty access_token".to_string(),
        ));
    }

    Ok(AuthToken::new(parsed.access_token))
}

/// Interpret a checkout session response.
///
/// A non-2xx status is a well-formed refusal, not a fault: the gateway
/// answered and declined, so the caller gets `Failure` with the reason the
/// gateway gave. A 2xx body that lacks a usable `checkout_url` is a fault.
fn interpret_checkout_response(
    status: reqwest::StatusCode,
    body: &[u8],
) -> Result<PaymentSessionResult, GatewayError> {
    if !status.is_success() {
        let reason = extract_failure_reason(body)
            .unwrap_or_else(|| format!("gateway returned {}", status));
        tracing::warn!(status = %status, reason = %reason, "Gateway refused checkout session");
        return Ok(PaymentSessionResult::Failure { reason });
    }

    let parsed: CheckoutResponse = serde_json::from_slice(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if parsed.checkout_url.is_empty() {
        return Err(GatewayError::MalformedResponse(
            "empty checkout_url".to_string(),
        ));
    }

    Ok(PaymentSessionResult::Success {
        checkout_url: parsed.checkout_url,
    })
}

/// Pull a human-readable reason out of a gateway error body.
fn extract_failure_reason(body: &[u8]) -> Option<String> {
    let parsed: GatewayErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .filter(|reason| !reason.is_empty())
}
