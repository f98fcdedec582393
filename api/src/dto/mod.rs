//! Request and response bodies

pub mod auth;
pub mod order;

pub use auth::{
    AccessTokenResponse, AccountResponse, LoginRequest, LoginResponse, MessageResponse,
    SignUpRequest,
};
pub use order::{OrderRequest, OrderResponse, OrderStatusRequest};
pub use po_shared::errors::ErrorResponse;
