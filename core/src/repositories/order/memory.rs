//! In-memory implementation of OrderRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::order::{Order, OrderStatus, PizzaSize};
use crate::errors::DomainError;

use super::trait_::OrderRepository;

/// Process-local order store
///
/// Mutations run under the map's write guard, which serializes concurrent
/// updates of the same order.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }

    fn sorted(mut orders: Vec<Order>) -> Vec<Order> {
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        orders
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(Self::sorted(orders.values().cloned().collect()))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(Self::sorted(
            orders
                .values()
                .filter(|o| o.owner_id == owner_id)
                .cloned()
                .collect(),
        ))
    }

    async fn update_fields(
        &self,
        id: Uuid,
        quantity: i32,
        size: PizzaSize,
    ) -> Result<Option<Order>, DomainError> {
        let mut orders = self.orders.write().await;
        Ok(orders.get_mut(&id).map(|order| {
            order.apply_fields(quantity, size);
            order.clone()
        }))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let mut orders = self.orders.write().await;
        Ok(orders.get_mut(&id).map(|order| {
            order.apply_status(status);
            order.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut orders = self.orders.write().await;
        Ok(orders.remove(&id))
    }
}
