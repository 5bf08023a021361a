//! Order payment status state machine.
//!
//! Defines all possible order payment states and valid transitions
//! according to the checkout and reconciliation lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Payment status of an order.
///
/// Represents where an order sits in the hosted checkout flow,
/// from creation through gateway confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order exists but checkout has not been initiated.
    Created,

    /// Checkout session established, awaiting gateway confirmation.
    Pending,

    /// Gateway confirmed payment. Terminal.
    Complete,

    /// Gateway reported payment failure.
    /// The customer may retry checkout, which returns the order to Pending.
    Failed,
}

impl StateMachine for OrderStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            // From CREATED
            (Created, Pending)
                | (Created, Complete) // Confirmation can outrun session bookkeeping
                | (Created, Failed)
            // From PENDING
                | (Pending, Complete)
                | (Pending, Failed)
            // From FAILED
                | (Failed, Pending) // Customer retries checkout
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OrderStatus::*;
        match self {
            Created => vec![Pending, Complete, Failed],
            Pending => vec![Complete, Failed],
            Complete => vec![],
            Failed => vec![Pending],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit Tests - State Transitions

    #[test]
    fn created_can_transition_to_pending() {
        let status = OrderStatus::Created;
        assert!(status.can_transition_to(&OrderStatus::Pending));

        let result = status.transition_to(OrderStatus::Pending);
        assert_eq!(result, Ok(OrderStatus::Pending));
    }

    #[test]
    fn created_can_transition_to_complete() {
        let status = OrderStatus::Created;
        assert!(status.can_transition_to(&OrderStatus::Complete));

        let result = status.transition_to(OrderStatus::Complete);
        assert_eq!(result, Ok(OrderStatus::Complete));
    }

    #[test]
    fn created_can_transition_to_failed() {
        let status = OrderStatus::Created;
        assert!(status.can_transition_to(&OrderStatus::Failed));

        let result = status.transition_to(OrderStatus::Failed);
        assert_eq!(result, Ok(OrderStatus::Failed));
    }

    #[test]
    fn pending_can_transition_to_complete() {
        let status = OrderStatus::Pending;
        assert!(status.can_transition_to(&OrderStatus::Complete));

        let result = status.transition_to(OrderStatus::Complete);
        assert_eq!(result, Ok(OrderStatus::Complete));
    }

    #[test]
    fn pending_can_transition_to_failed() {
        let status = OrderStatus::Pending;
        assert!(status.can_transition_to(&OrderStatus::Failed));

        let result = status.transition_to(OrderStatus::Failed);
        assert_eq!(result, Ok(OrderStatus::Failed));
    }

    #[test]
    fn pending_cannot_return_to_created() {
        let status = OrderStatus::Pending;
        assert!(!status.can_transition_to(&OrderStatus::Created));

        let result = status.transition_to(OrderStatus::Created);
        assert!(result.is_err());
    }

    #[test]
    fn failed_can_retry_to_pending() {
        let status = OrderStatus::Failed;
        assert!(status.can_transition_to(&OrderStatus::Pending));

        let result = status.transition_to(OrderStatus::Pending);
        assert_eq!(result, Ok(OrderStatus::Pending));
    }

    #[test]
    fn failed_cannot_transition_to_complete() {
        // A failed order must go back through checkout, never
        // straight to Complete on a conflicting confirmation.
        let status = OrderStatus::Failed;
        assert!(!status.can_transition_to(&OrderStatus::Complete));

        let result = status.transition_to(OrderStatus::Complete);
        assert!(result.is_err());
    }

    #[test]
    fn complete_cannot_transition_to_failed() {
        let status = OrderStatus::Complete;
        assert!(!status.can_transition_to(&OrderStatus::Failed));

        let result = status.transition_to(OrderStatus::Failed);
        assert!(result.is_err());
    }

    // Unit Tests - Terminality

    #[test]
    fn complete_is_terminal() {
        assert!(OrderStatus::Complete.is_terminal());
        assert!(OrderStatus::Complete.valid_transitions().is_empty());
    }

    #[test]
    fn failed_is_not_terminal_customer_can_retry() {
        // Failed still accepts a retry back to Pending
        assert!(!OrderStatus::Failed.is_terminal());
    }

    #[test]
    fn created_and_pending_are_not_terminal() {
        assert!(!OrderStatus::Created.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
    }

    // Additional validation tests

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in [
            OrderStatus::Created,
            OrderStatus::Pending,
            OrderStatus::Complete,
            OrderStatus::Failed,
        ] {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }

    #[test]
    fn status_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Complete).unwrap(),
            "\"complete\""
        );
    }
}
