//! ReconcileWebhookHandler - Command handler for processing gateway payment notifications.

use std::sync::Arc;

use crate::domain::foundation::{DeliveryId, ErrorCode, OrderId, StateMachine};
use crate::domain::payments::{
    NotificationStatus, Order, OrderStatus, ReconciliationError, StatusTransition,
    WebhookNotification, WebhookVerifier,
};
use crate::ports::OrderStore;

/// Order note recorded when the gateway reports a failed payment.
pub const NOTE_PAYMENT_FAILED: &str = "Payment failed.";

/// Command to reconcile one webhook delivery.
#[derive(Debug, Clone)]
pub struct ReconcileWebhookCommand {
    /// Raw webhook payload bytes, exactly as received.
    pub payload: Vec<u8>,
    /// Hex digest from the signature header.
    pub signature: String,
}

/// Result of webhook reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileResult {
    /// The notification moved the order to a new status.
    Applied {
        order_id: OrderId,
        status: OrderStatus,
    },
    /// The order was already in the notified status. Nothing changed.
    AlreadyApplied {
        order_id: OrderId,
        status: OrderStatus,
    },
    /// The status value is not one this service acts on.
    /// Acknowledged so the gateway stops redelivering.
    Unrecognized { order_id: OrderId, status: String },
}

/// Terminal status requested by a notification.
#[derive(Debug, Clone, Copy)]
enum TerminalTarget {
    Complete,
    Failed,
}

impl TerminalTarget {
    fn status(self) -> OrderStatus {
        match self {
            TerminalTarget::Complete => OrderStatus::Complete,
            TerminalTarget::Failed => OrderStatus::Failed,
        }
    }
}

/// Handler for reconciling gateway payment notifications.
///
/// Verifies each delivery cryptographically, then applies the reported
/// terminal status to the order exactly once. Redelivered notifications
/// are acknowledged without re-applying side effects, and conflicting
/// terminal statuses are rejected rather than overwritten.
pub struct ReconcileWebhookHandler {
    order_store: Arc<dyn OrderStore>,
    verifier: Arc<WebhookVerifier>,
}

impl ReconcileWebhookHandler {
    pub fn new(order_store: Arc<dyn OrderStore>, verifier: Arc<WebhookVerifier>) -> Self {
        Self {
            order_store,
            verifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReconcileWebhookCommand,
    ) -> Result<ReconcileResult, ReconciliationError> {
        let delivery_id = DeliveryId::new();

        // 1. Parse the notification body
        let notification = WebhookNotification::parse(&cmd.payload).map_err(|e| {
            tracing::warn!(
                delivery_id = %delivery_id,
                error = %e,
                "Rejected malformed webhook payload"
            );
            e
        })?;

        // 2. Verify the signature over the raw bytes before trusting the content
        self.verifier
            .verify(&cmd.payload, &cmd.signature)
            .map_err(|e| {
                tracing::warn!(
                    delivery_id = %delivery_id,
                    order_id = %notification.order_id,
                    "Rejected webhook with invalid signature"
                );
                e
            })?;

        // 3. Resolve the order
        let order = self
            .order_store
            .find(notification.order_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    delivery_id = %delivery_id,
                    order_id = %notification.order_id,
                    "Webhook references unknown order"
                );
                ReconciliationError::OrderNotFound(notification.order_id)
            })?;

        // 4. Apply the reported status
        match &notification.status {
            NotificationStatus::Completed => {
                self.apply(delivery_id, &order, TerminalTarget::Complete)
                    .await
            }
            NotificationStatus::Failed => {
                self.apply(delivery_id, &order, TerminalTarget::Failed)
                    .await
            }
            NotificationStatus::Unrecognized(status) => {
                tracing::warn!(
                    delivery_id = %delivery_id,
                    order_id = %order.id,
                    status = %status,
                    "Acknowledged webhook with unrecognized status"
                );
                Ok(ReconcileResult::Unrecognized {
                    order_id: order.id,
                    status: status.clone(),
                })
            }
        }
    }

    async fn apply(
        &self,
        delivery_id: DeliveryId,
        order: &Order,
        target: TerminalTarget,
    ) -> Result<ReconcileResult, ReconciliationError> {
        let requested = target.status();

        // Redelivery of a status that already settled
        if order.status == requested {
            tracing::info!(
                delivery_id = %delivery_id,
                order_id = %order.id,
                status = ?requested,
                "Notification already applied"
            );
            return Ok(ReconcileResult::AlreadyApplied {
                order_id: order.id,
                status: requested,
            });
        }

        if !order.status.can_transition_to(&requested) {
            tracing::error!(
                delivery_id = %delivery_id,
                order_id = %order.id,
                current = ?order.status,
                requested = ?requested,
                "Conflicting terminal status in notification"
            );
            return Err(ReconciliationError::ConflictingStatus {
                order_id: order.id,
                current: order.status,
                requested,
            });
        }

        let result = match target {
            TerminalTarget::Complete => self.order_store.confirm_payment(order.id).await,
            TerminalTarget::Failed => {
                self.order_store
                    .mark_failed(order.id, NOTE_PAYMENT_FAILED)
                    .await
            }
        };

        match result {
            Ok(StatusTransition::Applied { from, to }) => {
                tracing::info!(
                    delivery_id = %delivery_id,
                    order_id = %order.id,
                    from = ?from,
                    to = ?to,
                    "Applied notification transition"
                );
                Ok(ReconcileResult::Applied {
                    order_id: order.id,
                    status: to,
                })
            }
            // A concurrent delivery applied the same status between the
            // pre-check and the store write
            Ok(StatusTransition::Unchanged) => Ok(ReconcileResult::AlreadyApplied {
                order_id: order.id,
                status: requested,
            }),
            Err(e) if e.code == ErrorCode::InvalidStateTransition => {
                // A concurrent delivery settled the order differently in
                // between; refetch so the conflict carries the live status
                let current = self
                    .order_store
                    .find(order.id)
                    .await?
                    .map(|o| o.status)
                    .unwrap_or(order.status);
                Err(ReconciliationError::ConflictingStatus {
                    order_id: order.id,
                    current,
                    requested,
                })
            }
            Err(e) => Err(ReconciliationError::StoreFailure(e)),
        }
    }
}
