//! Domain entities representing core business objects.

pub mod account;
pub mod order;
pub mod token;


// Re-export commonly used types
pub use account::{Account, NewAccount};
pub use order::{Order, OrderStatus, PizzaSize};
pub use token::{
    Claims, TokenPair, TokenPurpose,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS, JWT_ISSUER,
};
