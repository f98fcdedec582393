//! Order request and response bodies
//!
//! Field names follow the public wire format (`pizza_size`,
//! `order_status`) rather than the entity's.

use chrono::{DateTime, Utc};
use po_core::domain::entities::order::{Order, OrderStatus, PizzaSize};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for placing or updating an order
///
/// `quantity` is taken as a wide integer so that out-of-range values reach
/// the ledger and fail as `invalid_quantity` instead of a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub quantity: i64,
    #[serde(default)]
    pub pizza_size: PizzaSize,
}

/// Body for a status change; the value is parsed by the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusRequest {
    #[serde(default = "default_order_status")]
    pub order_status: String,
}

fn default_order_status() -> String {
    OrderStatus::Pending.as_str().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub quantity: i32,
    pub pizza_size: PizzaSize,
    pub order_status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            owner_id: order.owner_id,
            quantity: order.quantity,
            pizza_size: order.size,
            order_status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
