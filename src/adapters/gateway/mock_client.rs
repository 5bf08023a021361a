//! Mock payment gateway client for testing.
//!
//! Provides a configurable implementation of `PaymentGatewayClient` for unit
//! and integration tests. Supports:
//! - Pre-configured tokens and session results
//! - Error injection per pipeline stage
//! - Call counting and request capture

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::payments::{
    AuthError, AuthToken, GatewayError, PaymentRequest, PaymentSessionResult,
};
use crate::ports::PaymentGatewayClient;

/// Mock payment gateway client.
///
/// # Example
///
/// ```ignore
/// let mock = MockGatewayClient::with_checkout_url("https://pay.example/s/abc");
///
/// // Inject a failure instead
/// mock.fail_authentication(AuthError::TransportFailure("timeout".into()));
///
/// // Assert on interaction afterwards
/// assert_eq!(mock.auth_call_count(), 1);
/// ```
#[derive(Default)]
pub struct MockGatewayClient {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Token returned by successful authentication.
    next_token: Option<String>,

    /// Error returned by every `authenticate` call until cleared.
    auth_error: Option<AuthError>,

    /// Error returned by every `create_session` call until cleared.
    session_error: Option<GatewayError>,

    /// Session result returned on success.
    next_session: Option<PaymentSessionResult>,

    /// Number of `authenticate` calls.
    auth_calls: usize,

    /// Number of `create_session` calls.
    session_calls: usize,

    /// Last payment request passed to `create_session`.
    last_request: Option<PaymentRequest>,
}

impl MockGatewayClient {
    /// Create a new mock with default configuration.
    ///
    /// Authentication succeeds with a generated token and session creation
    /// succeeds with a mock checkout URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose sessions resolve to the given checkout URL.
    pub fn with_checkout_url(checkout_url: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.set_session_result(PaymentSessionResult::Success {
            checkout_url: checkout_url.into(),
        });
        mock
    }

    // ══════════════════════════════════════════════════════════════
    // Configuration Methods
    // ══════════════════════════════════════════════════════════════

    /// Set the token returned by successful authentication.
    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.lock().unwrap().next_token = Some(token.into());
    }

    /// Make every `authenticate` call fail with the given error.
    pub fn fail_authentication(&self, error: AuthError) {
        self.inner.lock().unwrap().auth_error = Some(error);
    }

    /// Make every `create_session` call fail with the given error.
    pub fn fail_session(&self, error: GatewayError) {
        self.inner.lock().unwrap().session_error = Some(error);
    }

    /// Make session creation return a well-formed gateway refusal.
    pub fn refuse_session(&self, reason: impl Into<String>) {
        self.set_session_result(PaymentSessionResult::Failure {
            reason: reason.into(),
        });
    }

    /// Set the session result returned on success.
    pub fn set_session_result(&self, result: PaymentSessionResult) {
        self.inner.lock().unwrap().next_session = Some(result);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.auth_error = None;
        state.session_error = None;
    }

    // ══════════════════════════════════════════════════════════════
    // Call Tracking
    // ══════════════════════════════════════════════════════════════

    /// Number of `authenticate` calls so far.
    pub fn auth_call_count(&self) -> usize {
        self.inner.lock().unwrap().auth_calls
    }

    /// Number of `create_session` calls so far.
    pub fn session_call_count(&self) -> usize {
        self.inner.lock().unwrap().session_calls
    }

    /// Last payment request passed to `create_session`, if any.
    pub fn last_request(&self) -> Option<PaymentRequest> {
        self.inner.lock().unwrap().last_request.clone()
    }
}

impl Clone for MockGatewayClient {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentGatewayClient for MockGatewayClient {
    async fn authenticate(&self) -> Result<AuthToken, AuthError> {
        let mut state = self.inner.lock().unwrap();
        state.auth_calls += 1;

        if let Some(error) = &state.auth_error {
            return Err(error.clone());
        }

        let token = state
            .next_token
            .clone()
            .unwrap_or_else(|| "mock-access-token".to_string());

        Ok(AuthToken::new(token))
    }

    async fn create_session(
        &self,
        _token: &AuthToken,
        request: &PaymentRequest,
    ) -> Result<PaymentSessionResult, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.session_calls += 1;
        state.last_request = Some(request.clone());

        if let Some(error) = &state.session_error {
            return Err(error.clone());
        }

        let result = state
            .next_session
            .clone()
            .unwrap_or_else(|| PaymentSessionResult::Success {
                checkout_url: format!(
                    "https://checkout.payment-gateway.com/session/{}",
                    request.order_id
                ),
            });

        Ok(result)
    }
}
