//! Order store port.
//!
//! Defines the contract for reading and updating orders on behalf of
//! checkout orchestration and webhook reconciliation.
//!
//! # Design
//!
//! - **Per-order atomicity**: each status mutation loads, transitions,
//!   and persists the order as one unit, so concurrent webhook
//!   deliveries serialize rather than clobber each other
//! - **Idempotency surfaced**: mutation methods report whether the
//!   transition was applied or was already in effect, which is what
//!   lets callers acknowledge replayed notifications without firing
//!   side effects twice

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::payments::{Order, StatusTransition};

/// Port for order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Looks up an order by id.
    async fn find(&self, id: OrderId) -> Result<Option<Order>, DomainError>;

    /// Inserts or replaces an order.
    async fn upsert(&self, order: Order) -> Result<(), DomainError>;

    /// Transitions the order to Pending, recording the given note.
    ///
    /// Returns `Unchanged` if the order is already Pending. Fails with
    /// `InvalidStateTransition` if the current status forbids it.
    async fn mark_pending(
        &self,
        id: OrderId,
        note: &str,
    ) -> Result<StatusTransition, DomainError>;

    /// Transitions the order to Complete.
    ///
    /// Returns `Unchanged` if the order is already Complete.
    async fn confirm_payment(&self, id: OrderId) -> Result<StatusTransition, DomainError>;

    /// Transitions the order to Failed, recording the given note.
    ///
    /// Returns `Unchanged` if the order is already Failed. The note is
    /// only recorded when the transition is actually applied.
    async fn mark_failed(&self, id: OrderId, note: &str)
        -> Result<StatusTransition, DomainError>;
}
