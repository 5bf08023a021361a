//! In-Memory Order Store Adapter
//!
//! Holds orders in a process-local map. Useful for testing, development,
//! and single-instance deployments where the storefront owns durable
//! order state.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::payments::{Order, StatusTransition};
use crate::ports::OrderStore;

/// In-memory order store.
///
/// Status transitions run under the store's write lock, so concurrent
/// webhook deliveries for the same order serialize and at most one of
/// them applies a given terminal transition.
#[derive(Debug, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored orders (useful for tests)
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }

    /// Get the number of stored orders
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find(&self, id: OrderId) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn upsert(&self, order: Order) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order);
        Ok(())
    }

    async fn mark_pending(
        &self,
        id: OrderId,
        note: &str,
    ) -> Result<StatusTransition, DomainError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| DomainError::order_not_found(id))?;
        order.mark_pending(note)
    }

    async fn confirm_payment(&self, id: OrderId) -> Result<StatusTransition, DomainError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| DomainError::order_not_found(id))?;
        order.confirm_payment()
    }

    async fn mark_failed(
        &self,
        id: OrderId,
        note: &str,
    ) -> Result<StatusTransition, DomainError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| DomainError::order_not_found(id))?;
        order.mark_failed(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CurrencyCode, ErrorCode, Money};
    use crate::domain::payments::OrderStatus;
    use rust_decimal::Decimal;

    fn test_order(id: u64) -> Order {
        let amount = "49.99".parse::<Decimal>().unwrap();
        let total = Money::new(amount, CurrencyCode::new("USD").unwrap()).unwrap();
        Order::new(
            OrderId::new(id),
            total,
            "jane@example.com",
            "Jane Doe",
            "https://shop.example/thanks",
            "https://shop.example/cart",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn upsert_and_find_round_trips_order() {
        let store = InMemoryOrderStore::new();
        let order = test_order(100);

        store.upsert(order.clone()).await.unwrap();

        let found = store.find(OrderId::new(100)).await.unwrap();
        assert_eq!(found, Some(order));
    }

    #[tokio::test]
    async fn find_missing_order_returns_none() {
        let store = InMemoryOrderStore::new();

        let found = store.find(OrderId::new(404)).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_existing_order() {
        let store = InMemoryOrderStore::new();
        store.upsert(test_order(100)).await.unwrap();

        let mut updated = test_order(100);
        updated.customer_email = "updated@example.com".to_string();
        store.upsert(updated).await.unwrap();

        let found = store.find(OrderId::new(100)).await.unwrap().unwrap();
        assert_eq!(found.customer_email, "updated@example.com");
        assert_eq!(store.order_count().await, 1);
    }

    #[tokio::test]
    async fn mark_pending_applies_transition_and_note() {
        let store = InMemoryOrderStore::new();
        store.upsert(test_order(100)).await.unwrap();

        let transition = store
            .mark_pending(OrderId::new(100), "Awaiting payment confirmation.")
            .await
            .unwrap();

        assert!(transition.is_applied());
        let order = store.find(OrderId::new(100)).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.notes.len(), 1);
        assert_eq!(order.notes[0].content, "Awaiting payment confirmation.");
    }

    #[tokio::test]
    async fn confirm_payment_reaches_terminal_complete() {
        let store = InMemoryOrderStore::new();
        store.upsert(test_order(100)).await.unwrap();
        store
            .mark_pending(OrderId::new(100), "Awaiting payment confirmation.")
            .await
            .unwrap();

        let transition = store.confirm_payment(OrderId::new(100)).await.unwrap();

        assert!(transition.is_applied());
        let order = store.find(OrderId::new(100)).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Complete);
    }

    #[tokio::test]
    async fn repeated_terminal_transition_is_unchanged() {
        let store = InMemoryOrderStore::new();
        store.upsert(test_order(100)).await.unwrap();
        store
            .mark_failed(OrderId::new(100), "Payment failed.")
            .await
            .unwrap();

        let replay = store
            .mark_failed(OrderId::new(100), "Payment failed.")
            .await
            .unwrap();

        assert_eq!(replay, StatusTransition::Unchanged);
        let order = store.find(OrderId::new(100)).await.unwrap().unwrap();
        assert_eq!(order.notes.len(), 1);
    }

    #[tokio::test]
    async fn transition_on_missing_order_is_not_found() {
        let store = InMemoryOrderStore::new();

        let result = store
            .mark_pending(OrderId::new(404), "Awaiting payment confirmation.")
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn rejected_transition_surfaces_domain_error() {
        let store = InMemoryOrderStore::new();
        store.upsert(test_order(100)).await.unwrap();
        store.confirm_payment(OrderId::new(100)).await.unwrap();

        let result = store
            .mark_failed(OrderId::new(100), "Payment failed.")
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn concurrent_failure_replays_keep_one_note() {
        let store = InMemoryOrderStore::new();
        store.upsert(test_order(100)).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.mark_failed(OrderId::new(100), "Payment failed.").await
            }));
        }

        let mut applied = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_applied() {
                applied += 1;
            }
        }

        assert_eq!(applied, 1);
        let order = store.find(OrderId::new(100)).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Failed);
        assert_eq!(order.notes.len(), 1);
    }

    #[tokio::test]
    async fn clear_removes_all_orders() {
        let store = InMemoryOrderStore::new();
        store.upsert(test_order(1)).await.unwrap();
        store.upsert(test_order(2)).await.unwrap();
        assert_eq!(store.order_count().await, 2);

        store.clear().await;

        assert_eq!(store.order_count().await, 0);
    }
}
