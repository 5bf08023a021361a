//! Order aggregate entity.
//!
//! The Order aggregate is this service's view of a storefront order:
//! the total to collect, the customer contact details the gateway needs,
//! and the payment status driven by checkout and webhook reconciliation.
//!
//! # Design Decisions
//!
//! - **Ids come from the host**: Orders are created upstream by the
//!   storefront, so there is no random id generation here
//! - **Notes are append-only**: Order notes record payment milestones
//!   and are never rewritten, which makes replayed webhooks observable
//! - **Self-transition is a no-op**: Re-applying the current status
//!   returns [`StatusTransition::Unchanged`] without touching notes,
//!   so duplicate gateway notifications settle exactly once

use crate::domain::foundation::{
    DomainError, ErrorCode, Money, OrderId, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// A timestamped note attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNote {
    /// Human readable note content.
    pub content: String,

    /// When the note was recorded.
    pub created_at: Timestamp,
}

impl OrderNote {
    /// Creates a note timestamped at the current moment.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// Outcome of applying a status change to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    /// The status changed from `from` to `to`.
    Applied { from: OrderStatus, to: OrderStatus },

    /// The order was already in the requested status. Nothing changed.
    Unchanged,
}

impl StatusTransition {
    /// Returns true if the status actually changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, StatusTransition::Applied { .. })
    }
}

/// Order aggregate - a storefront order moving through hosted checkout.
///
/// # Invariants
///
/// - `id` is unique within the store
/// - Status transitions follow state machine rules
/// - Notes are append-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier assigned by the host commerce system.
    pub id: OrderId,

    /// Amount to collect, with currency.
    pub total: Money,

    /// Customer email forwarded to the gateway.
    pub customer_email: String,

    /// Customer display name. May be empty for guest checkout.
    pub customer_name: String,

    /// Where the gateway sends the customer after payment.
    pub return_url: String,

    /// Where the gateway sends the customer if they abandon payment.
    pub cancel_url: String,

    /// Current payment status.
    pub status: OrderStatus,

    /// Append-only payment milestone notes.
    pub notes: Vec<OrderNote>,

    /// When the order was first seen by this service.
    pub created_at: Timestamp,

    /// When the order was last updated.
    pub updated_at: Timestamp,
}

impl Order {
    /// Creates a new order in Created status.
    ///
    /// # Errors
    ///
    /// Returns error if the customer email or redirect URLs are missing
    /// or malformed. The customer name is allowed to be empty.
    pub fn new(
        id: OrderId,
        total: Money,
        customer_email: impl Into<String>,
        customer_name: impl Into<String>,
        return_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let customer_email = customer_email.into();
        if customer_email.is_empty() {
            return Err(ValidationError::empty_field("customer_email"));
        }
        if !customer_email.contains('@') {
            return Err(ValidationError::invalid_format(
                "customer_email",
                "missing @ symbol",
            ));
        }

        let return_url = return_url.into();
        if return_url.is_empty() {
            return Err(ValidationError::empty_field("return_url"));
        }

        let cancel_url = cancel_url.into();
        if cancel_url.is_empty() {
            return Err(ValidationError::empty_field("cancel_url"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            total,
            customer_email,
            customer_name: customer_name.into(),
            return_url,
            cancel_url,
            status: OrderStatus::Created,
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Appends a note to the order.
    pub fn add_note(&mut self, content: impl Into<String>) {
        self.notes.push(OrderNote::new(content));
        self.updated_at = Timestamp::now();
    }

    /// Marks the order as awaiting gateway confirmation, recording a note.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn mark_pending(&mut self, note: &str) -> Result<StatusTransition, DomainError> {
        self.apply_status(OrderStatus::Pending, Some(note))
    }

    /// Marks the order as paid after gateway confirmation.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn confirm_payment(&mut self) -> Result<StatusTransition, DomainError> {
        self.apply_status(OrderStatus::Complete, None)
    }

    /// Marks the order as failed, recording a note.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn mark_failed(&mut self, note: &str) -> Result<StatusTransition, DomainError> {
        self.apply_status(OrderStatus::Failed, Some(note))
    }

    /// Applies a status change, treating self-transition as a no-op.
    ///
    /// The no-op path skips the note so that replayed notifications
    /// leave no trace beyond the first delivery.
    fn apply_status(
        &mut self,
        target: OrderStatus,
        note: Option<&str>,
    ) -> Result<StatusTransition, DomainError> {
        if self.status == target {
            return Ok(StatusTransition::Unchanged);
        }

        let from = self.status;
        self.transition_to(target)?;
        if let Some(content) = note {
            self.notes.push(OrderNote::new(content));
        }
        self.updated_at = Timestamp::now();
        Ok(StatusTransition::Applied { from, to: target })
    }

    /// Transition to a new status using the state machine.
    fn transition_to(&mut self, target: OrderStatus) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot transition order {} from {:?} to {:?}",
                    self.id, self.status, target
                ),
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CurrencyCode;

    fn test_total() -> Money {
        Money::new("49.99".parse().unwrap(), CurrencyCode::new("USD").unwrap()).unwrap()
    }

    fn test_order() -> Order {
        Order::new(
            OrderId::new(100),
            test_total(),
            "jane@example.com",
            "Jane Doe",
            "https://shop.example/return",
            "https://shop.example/cancel",
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_order_starts_created_with_no_notes() {
        let order = test_order();

        assert_eq!(order.status, OrderStatus::Created);
        assert!(order.notes.is_empty());
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn new_order_rejects_empty_email() {
        let result = Order::new(
            OrderId::new(1),
            test_total(),
            "",
            "Jane Doe",
            "https://shop.example/return",
            "https://shop.example/cancel",
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn new_order_rejects_email_without_at_symbol() {
        let result = Order::new(
            OrderId::new(1),
            test_total(),
            "not-an-email",
            "Jane Doe",
            "https://shop.example/return",
            "https://shop.example/cancel",
        );
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn new_order_rejects_empty_redirect_urls() {
        let missing_return = Order::new(
            OrderId::new(1),
            test_total(),
            "jane@example.com",
            "Jane Doe",
            "",
            "https://shop.example/cancel",
        );
        assert!(missing_return.is_err());

        let missing_cancel = Order::new(
            OrderId::new(1),
            test_total(),
            "jane@example.com",
            "Jane Doe",
            "https://shop.example/return",
            "",
        );
        assert!(missing_cancel.is_err());
    }

    #[test]
    fn new_order_allows_empty_customer_name() {
        let result = Order::new(
            OrderId::new(1),
            test_total(),
            "jane@example.com",
            "",
            "https://shop.example/return",
            "https://shop.example/cancel",
        );
        assert!(result.is_ok());
    }

    // Lifecycle transition tests

    #[test]
    fn mark_pending_applies_transition_and_records_note() {
        let mut order = test_order();

        let result = order.mark_pending("Awaiting payment confirmation.").unwrap();
        assert_eq!(
            result,
            StatusTransition::Applied {
                from: OrderStatus::Created,
                to: OrderStatus::Pending,
            }
        );
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.notes.len(), 1);
        assert_eq!(order.notes[0].content, "Awaiting payment confirmation.");
    }

    #[test]
    fn mark_pending_twice_is_unchanged_without_second_note() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();

        let result = order.mark_pending("Awaiting payment confirmation.").unwrap();
        assert_eq!(result, StatusTransition::Unchanged);
        assert_eq!(order.notes.len(), 1);
    }

    #[test]
    fn confirm_payment_from_pending_adds_no_note() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();

        let result = order.confirm_payment().unwrap();
        assert!(result.is_applied());
        assert_eq!(order.status, OrderStatus::Complete);
        assert_eq!(order.notes.len(), 1);
    }

    #[test]
    fn confirm_payment_when_already_complete_is_unchanged() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();
        order.confirm_payment().unwrap();

        let result = order.confirm_payment().unwrap();
        assert_eq!(result, StatusTransition::Unchanged);
        assert_eq!(order.status, OrderStatus::Complete);
    }

    #[test]
    fn mark_failed_records_note() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();

        let result = order.mark_failed("Payment failed.").unwrap();
        assert!(result.is_applied());
        assert_eq!(order.status, OrderStatus::Failed);
        assert_eq!(order.notes.len(), 2);
        assert_eq!(order.notes[1].content, "Payment failed.");
    }

    #[test]
    fn replayed_failure_leaves_exactly_one_note() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();
        order.mark_failed("Payment failed.").unwrap();

        let replay = order.mark_failed("Payment failed.").unwrap();
        assert_eq!(replay, StatusTransition::Unchanged);

        let failure_notes = order
            .notes
            .iter()
            .filter(|n| n.content == "Payment failed.")
            .count();
        assert_eq!(failure_notes, 1);
    }

    #[test]
    fn failed_order_can_retry_checkout() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();
        order.mark_failed("Payment failed.").unwrap();

        let result = order.mark_pending("Awaiting payment confirmation.").unwrap();
        assert!(result.is_applied());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn confirm_payment_after_failure_is_rejected() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();
        order.mark_failed("Payment failed.").unwrap();

        let result = order.confirm_payment();
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(order.status, OrderStatus::Failed);
    }

    #[test]
    fn mark_failed_after_completion_is_rejected() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();
        order.confirm_payment().unwrap();

        let result = order.mark_failed("Payment failed.");
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(order.status, OrderStatus::Complete);
        assert!(order.notes.iter().all(|n| n.content != "Payment failed."));
    }

    #[test]
    fn rejected_transition_does_not_add_note() {
        let mut order = test_order();
        order.mark_pending("Awaiting payment confirmation.").unwrap();
        order.confirm_payment().unwrap();
        let notes_before = order.notes.len();

        let _ = order.mark_failed("Payment failed.");
        assert_eq!(order.notes.len(), notes_before);
    }

    #[test]
    fn add_note_appends_in_order() {
        let mut order = test_order();
        order.add_note("First note");
        order.add_note("Second note");

        assert_eq!(order.notes.len(), 2);
        assert_eq!(order.notes[0].content, "First note");
        assert_eq!(order.notes[1].content, "Second note");
    }
}
