//! MySQL implementation of the OrderRepository trait.
//!
//! Each mutation locks its row with `SELECT ... FOR UPDATE` inside a
//! transaction, so concurrent writers to one order serialize.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, Row, Transaction};
use uuid::Uuid;

use po_core::domain::entities::order::{Order, OrderStatus, PizzaSize};
use po_core::errors::DomainError;
use po_core::repositories::OrderRepository;

use super::db_error;

const ORDER_COLUMNS: &str = "id, owner_id, quantity, size, status, created_at, updated_at";

/// MySQL implementation of OrderRepository
pub struct MySqlOrderRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Order entity
    fn row_to_order(row: &MySqlRow) -> Result<Order, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to get {}: {}", name, e))
        };
        let uuid = |name: &str, raw: String| {
            Uuid::parse_str(&raw)
                .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", name, e)))
        };

        let size: String = row.try_get("size").map_err(|e| column("size", e))?;
        let status: String = row.try_get("status").map_err(|e| column("status", e))?;

        Ok(Order {
            id: uuid("id", row.try_get("id").map_err(|e| column("id", e))?)?,
            owner_id: uuid(
                "owner_id",
                row.try_get("owner_id").map_err(|e| column("owner_id", e))?,
            )?,
            quantity: row.try_get("quantity").map_err(|e| column("quantity", e))?,
            size: size.parse::<PizzaSize>().map_err(DomainError::internal)?,
            status: status
                .parse::<OrderStatus>()
                .map_err(|e| DomainError::internal(e.to_string()))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }

    async fn begin(&self) -> Result<Transaction<'_, MySql>, DomainError> {
        self.pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))
    }

    async fn lock_order(
        tx: &mut Transaction<'_, MySql>,
        id: Uuid,
    ) -> Result<Option<Order>, DomainError> {
        let query = format!("SELECT {} FROM orders WHERE id = ? FOR UPDATE", ORDER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| db_error("Failed to lock order", e))?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn fetch_many(&self, query: &str, owner_id: Option<Uuid>) -> Result<Vec<Order>, DomainError> {
        let mut q = sqlx::query(query);
        if let Some(owner_id) = owner_id {
            q = q.bind(owner_id.to_string());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_order).collect()
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let query = r#"
            INSERT INTO orders (id, owner_id, quantity, size, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(order.id.to_string())
            .bind(order.owner_id.to_string())
            .bind(order.quantity)
            .bind(order.size.as_str())
            .bind(order.status.as_str())
            .bind(order.created_at)
            .bind(order.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create order", e))?;

        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let query = format!("SELECT {} FROM orders WHERE id = ? LIMIT 1", ORDER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let query = format!("SELECT {} FROM orders ORDER BY created_at, id", ORDER_COLUMNS);
        self.fetch_many(&query, None).await
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Order>, DomainError> {
        let query = format!(
            "SELECT {} FROM orders WHERE owner_id = ? ORDER BY created_at, id",
            ORDER_COLUMNS
        );
        self.fetch_many(&query, Some(owner_id)).await
    }

    async fn update_fields(
        &self,
        id: Uuid,
        quantity: i32,
        size: PizzaSize,
    ) -> Result<Option<Order>, DomainError> {
        let mut tx = self.begin().await?;
        let Some(mut order) = Self::lock_order(&mut tx, id).await? else {
            return Ok(None);
        };

        order.apply_fields(quantity, size);
        sqlx::query("UPDATE orders SET quantity = ?, size = ?, updated_at = ? WHERE id = ?")
            .bind(order.quantity)
            .bind(order.size.as_str())
            .bind(order.updated_at)
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to update order", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit order update", e))?;
        Ok(Some(order))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let mut tx = self.begin().await?;
        let Some(mut order) = Self::lock_order(&mut tx, id).await? else {
            return Ok(None);
        };

        order.apply_status(status);
        sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ?")
            .bind(order.status.as_str())
            .bind(order.updated_at)
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to update order status", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit status update", e))?;
        Ok(Some(order))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut tx = self.begin().await?;
        let Some(order) = Self::lock_order(&mut tx, id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete order", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit order deletion", e))?;
        Ok(Some(order))
    }
}
