//! Order route handlers
//!
//! Every handler here runs behind `JwtAuth`; the injected subject is resolved
//! to an account before the ledger is called.

pub mod manage;
pub mod query;

use actix_web::HttpResponse;

use crate::dto::MessageResponse;
use crate::middleware::AuthContext;

pub use manage::{delete_order, place_order, update_order, update_order_status};
pub use query::{get_order, get_user_order, list_all_orders, list_user_orders};

/// Handler for GET /api/v1/orders/
pub async fn hello(_auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("hello world"))
}
