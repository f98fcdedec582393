//! Order ledger implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::order::{Order, OrderStatus, PizzaSize};
use crate::errors::{DomainError, DomainResult, OrderError};
use crate::repositories::OrderRepository;
use crate::services::policy::AccessPolicy;

/// Order creation, lookup, mutation, deletion and listing
///
/// Every call takes an already-resolved actor. Checks run in a fixed order:
/// lookup (`NotFound`), then policy (`Unauthorized`), then payload
/// (`InvalidQuantity` / `InvalidStatus`), then the store mutation.
pub struct OrderLedger<O>
where
    O: OrderRepository,
{
    order_repository: Arc<O>,
}

impl<O> OrderLedger<O>
where
    O: OrderRepository,
{
    pub fn new(order_repository: Arc<O>) -> Self {
        Self { order_repository }
    }

    pub fn repository(&self) -> &Arc<O> {
        &self.order_repository
    }

    /// Place a pending order owned by `actor`
    pub async fn place(&self, actor: &Account, quantity: i64, size: PizzaSize) -> DomainResult<Order> {
        let quantity = validate_quantity(quantity)?;
        let order = self
            .order_repository
            .create(Order::new(actor.id, quantity, size))
            .await?;

        tracing::info!(
            order_id = %order.id,
            username = %actor.username,
            quantity,
            size = %size,
            "Order placed"
        );
        Ok(order)
    }

    /// Fetch any order the actor may view
    pub async fn get(&self, actor: &Account, id: Uuid) -> DomainResult<Order> {
        let order = self.find(id).await?;
        ensure(AccessPolicy::can_view(actor, &order), actor, id, "view")?;
        Ok(order)
    }

    /// Fetch one of the actor's own orders
    ///
    /// Someone else's order is reported as missing, never as forbidden.
    pub async fn get_own(&self, actor: &Account, id: Uuid) -> DomainResult<Order> {
        match self.order_repository.find_by_id(id).await? {
            Some(order) if order.is_owned_by(actor.id) => Ok(order),
            _ => Err(DomainError::order_not_found()),
        }
    }

    /// Every order in the store; staff only
    pub async fn list_all(&self, actor: &Account) -> DomainResult<Vec<Order>> {
        if !AccessPolicy::can_list_all(actor) {
            tracing::warn!(username = %actor.username, action = "list_all", "Access denied");
            return Err(DomainError::Unauthorized);
        }
        self.order_repository.list_all().await
    }

    /// Orders owned by the actor
    pub async fn list_for(&self, actor: &Account) -> DomainResult<Vec<Order>> {
        self.order_repository.list_by_owner(actor.id).await
    }

    /// Replace quantity and size; status is untouched
    pub async fn update_fields(
        &self,
        actor: &Account,
        id: Uuid,
        quantity: i64,
        size: PizzaSize,
    ) -> DomainResult<Order> {
        let order = self.find(id).await?;
        ensure(AccessPolicy::can_modify_fields(actor, &order), actor, id, "update_fields")?;
        let quantity = validate_quantity(quantity)?;

        let updated = self
            .order_repository
            .update_fields(id, quantity, size)
            .await?
            .ok_or_else(DomainError::order_not_found)?;

        tracing::info!(order_id = %id, username = %actor.username, quantity, size = %size, "Order updated");
        Ok(updated)
    }

    /// Move an order to a new status; staff only
    ///
    /// `status` must be one of the five wire names exactly.
    pub async fn set_status(&self, actor: &Account, id: Uuid, status: &str) -> DomainResult<Order> {
        let order = self.find(id).await?;
        ensure(AccessPolicy::can_change_status(actor, &order), actor, id, "set_status")?;
        let status: OrderStatus = status.parse()?;

        let updated = self
            .order_repository
            .update_status(id, status)
            .await?
            .ok_or_else(DomainError::order_not_found)?;

        tracing::info!(
            order_id = %id,
            username = %actor.username,
            from = %order.status,
            to = %status,
            "Order status changed"
        );
        Ok(updated)
    }

    /// Permanently remove an order and return its last snapshot
    pub async fn delete(&self, actor: &Account, id: Uuid) -> DomainResult<Order> {
        let order = self.find(id).await?;
        ensure(AccessPolicy::can_delete(actor, &order), actor, id, "delete")?;

        let removed = self
            .order_repository
            .delete(id)
            .await?
            .ok_or_else(DomainError::order_not_found)?;

        tracing::info!(order_id = %id, username = %actor.username, "Order deleted");
        Ok(removed)
    }

    async fn find(&self, id: Uuid) -> DomainResult<Order> {
        self.order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(order_id = %id, "Order not found");
                DomainError::order_not_found()
            })
    }
}

fn ensure(allowed: bool, actor: &Account, order_id: Uuid, action: &'static str) -> DomainResult<()> {
    if allowed {
        Ok(())
    } else {
        tracing::warn!(username = %actor.username, order_id = %order_id, action, "Access denied");
        Err(DomainError::Unauthorized)
    }
}

fn validate_quantity(quantity: i64) -> Result<i32, OrderError> {
    i32::try_from(quantity)
        .ok()
        .filter(|q| *q >= 1)
        .ok_or(OrderError::InvalidQuantity { value: quantity })
}
