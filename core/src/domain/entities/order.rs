//! Order entity and its enumerated fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::OrderError;

/// Pizza size of an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PizzaSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl PizzaSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaSize::Small => "SMALL",
            PizzaSize::Medium => "MEDIUM",
            PizzaSize::Large => "LARGE",
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PizzaSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMALL" => Ok(PizzaSize::Small),
            "MEDIUM" => Ok(PizzaSize::Medium),
            "LARGE" => Ok(PizzaSize::Large),
            _ => Err(format!("Invalid pizza size: {}", s)),
        }
    }
}

/// Fulfillment state of an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every accepted status, in fulfillment order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::InTransit => "IN_TRANSIT",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    /// Exact, case-sensitive match on the five wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier assigned at creation
    pub id: Uuid,

    /// Owning account; set at creation and never reassigned
    pub owner_id: Uuid,

    /// Number of pizzas, always at least 1
    pub quantity: i32,

    pub size: PizzaSize,

    pub status: OrderStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a pending order owned by `owner_id`
    ///
    /// Quantity is validated by the ledger before an order is built.
    pub fn new(owner_id: Uuid, quantity: i32, size: PizzaSize) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            quantity,
            size,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the owner-editable fields; status is untouched
    pub fn apply_fields(&mut self, quantity: i32, size: PizzaSize) {
        self.quantity = quantity;
        self.size = size;
        self.updated_at = Utc::now();
    }

    /// Moves the order to a new fulfillment state
    pub fn apply_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.owner_id == account_id
    }
}
