//! Repository interfaces (and in-memory implementations) for the stores
//! the core consumes.

pub mod order;
pub mod user;

pub use order::{InMemoryOrderRepository, OrderRepository};
pub use user::{InMemoryUserRepository, UserRepository};
