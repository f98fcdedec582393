//! Order repository trait defining the interface for order persistence.
//!
//! Every mutating method is a complete read-modify-write: implementations
//! apply it atomically per order (a transaction, a row lock, or a single
//! guarded critical section) so concurrent mutations of one order serialize
//! without tearing fields.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::{Order, OrderStatus, PizzaSize};
use crate::errors::DomainError;

/// Repository trait for Order persistence operations
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Find an order by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Order))` - Order found
    /// * `Ok(None)` - No order with given ID
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;

    /// Every order, oldest first
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Orders owned by one account, oldest first
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Order>, DomainError>;

    /// Replace quantity and size, leaving status untouched
    ///
    /// # Returns
    /// * `Ok(Some(Order))` - Snapshot after the update
    /// * `Ok(None)` - The order no longer exists
    async fn update_fields(
        &self,
        id: Uuid,
        quantity: i32,
        size: PizzaSize,
    ) -> Result<Option<Order>, DomainError>;

    /// Replace status, leaving quantity and size untouched
    ///
    /// # Returns
    /// * `Ok(Some(Order))` - Snapshot after the update
    /// * `Ok(None)` - The order no longer exists
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError>;

    /// Permanently remove an order
    ///
    /// # Returns
    /// * `Ok(Some(Order))` - Snapshot of the removed order
    /// * `Ok(None)` - The order did not exist
    async fn delete(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}
