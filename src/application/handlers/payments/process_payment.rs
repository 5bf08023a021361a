//! ProcessPaymentHandler - Command handler for sending an order through hosted checkout.

use std::sync::Arc;

use crate::domain::foundation::OrderId;
use crate::domain::payments::{
    GatewayError, OrchestrationError, Order, PaymentOutcome, PaymentRequest, PaymentSessionResult,
};
use crate::ports::{NoticeSink, OrderStore, PaymentGatewayClient};

/// Customer notice recorded when gateway authentication fails.
pub const NOTICE_AUTH_FAILED: &str = "Payment gateway authentication failed.";

/// Customer notice recorded when the gateway cannot be reached.
pub const NOTICE_CONNECTION_ERROR: &str = "Payment connection error.";

/// Customer notice recorded when the gateway refuses or misbehaves.
pub const NOTICE_GATEWAY_ERROR: &str = "Payment gateway error.";

/// Order note recorded when checkout moves the order to Pending.
pub const NOTE_AWAITING_CONFIRMATION: &str = "Awaiting payment confirmation.";

/// Command to start hosted checkout for an order.
#[derive(Debug, Clone)]
pub struct ProcessPaymentCommand {
    /// The order to pay for.
    pub order_id: OrderId,
}

/// Handler for starting hosted checkout.
///
/// Orchestrates a single payment attempt: authenticate against the
/// gateway, create a checkout session, and move the order to Pending
/// before handing back the redirect URL. The handler is infallible at
/// its boundary; every failure collapses into a fail outcome with the
/// diagnosis logged and a short customer notice recorded.
///
/// Authentication happens per attempt. Tokens are never cached, so a
/// retry after failure always starts from a fresh credential exchange.
pub struct ProcessPaymentHandler {
    order_store: Arc<dyn OrderStore>,
    gateway_client: Arc<dyn PaymentGatewayClient>,
    notice_sink: Arc<dyn NoticeSink>,
}

impl ProcessPaymentHandler {
    pub fn new(
        order_store: Arc<dyn OrderStore>,
        gateway_client: Arc<dyn PaymentGatewayClient>,
        notice_sink: Arc<dyn NoticeSink>,
    ) -> Self {
        Self {
            order_store,
            gateway_client,
            notice_sink,
        }
    }

    pub async fn handle(&self, cmd: ProcessPaymentCommand) -> PaymentOutcome {
        // 1. Resolve the order before any gateway contact
        let order = match self.resolve_order(cmd.order_id).await {
            Ok(order) => order,
            Err(e) => {
                tracing::error!(
                    order_id = %cmd.order_id,
                    error = %e,
                    "Checkout aborted before gateway contact"
                );
                return PaymentOutcome::fail();
            }
        };

        // 2. Authenticate this attempt with fresh client credentials
        let token = match self.gateway_client.authenticate().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(
                    order_id = %cmd.order_id,
                    transient = e.is_transient(),
                    error = %e,
                    "Gateway authentication failed"
                );
                self.record_notice(NOTICE_AUTH_FAILED).await;
                return PaymentOutcome::fail();
            }
        };

        // 3. Ask the gateway for a hosted checkout session
        let request = PaymentRequest::from_order(&order);
        let checkout_url = match self.gateway_client.create_session(&token, &request).await {
            Ok(PaymentSessionResult::Success { checkout_url }) => checkout_url,
            Ok(PaymentSessionResult::Failure { reason }) => {
                tracing::warn!(
                    order_id = %cmd.order_id,
                    reason = %reason,
                    "Gateway refused checkout session"
                );
                self.record_notice(NOTICE_GATEWAY_ERROR).await;
                return PaymentOutcome::fail();
            }
            Err(e) => {
                tracing::warn!(
                    order_id = %cmd.order_id,
                    transient = e.is_transient(),
                    error = %e,
                    "Checkout session request failed"
                );
                let notice = match e {
                    GatewayError::TransportFailure(_) => NOTICE_CONNECTION_ERROR,
                    GatewayError::MalformedResponse(_) => NOTICE_GATEWAY_ERROR,
                };
                self.record_notice(notice).await;
                return PaymentOutcome::fail();
            }
        };

        // 4. Move the order to Pending before handing out the redirect
        match self
            .order_store
            .mark_pending(cmd.order_id, NOTE_AWAITING_CONFIRMATION)
            .await
        {
            Ok(transition) => {
                tracing::info!(
                    order_id = %cmd.order_id,
                    applied = transition.is_applied(),
                    "Checkout session established"
                );
                PaymentOutcome::success(checkout_url)
            }
            Err(e) => {
                tracing::error!(
                    order_id = %cmd.order_id,
                    error = %e,
                    "Failed to mark order pending after session creation"
                );
                self.record_notice(NOTICE_GATEWAY_ERROR).await;
                PaymentOutcome::fail()
            }
        }
    }

    async fn resolve_order(&self, order_id: OrderId) -> Result<Order, OrchestrationError> {
        let order = self
            .order_store
            .find(order_id)
            .await?
            .ok_or(OrchestrationError::OrderNotFound(order_id))?;
        Ok(order)
    }

    /// Records a customer notice, tolerating sink failures.
    ///
    /// A broken sink must not turn a cleanly handled payment failure
    /// into something worse, so errors are logged and swallowed.
    async fn record_notice(&self, message: &str) {
        if let Err(e) = self.notice_sink.record_error(message).await {
            tracing::warn!(error = %e, notice = message, "Failed to record customer notice");
        }
    }
}
