use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::OrderResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

use po_core::repositories::{OrderRepository, UserRepository};

use super::super::AppState;

fn order_list(orders: Vec<po_core::domain::entities::order::Order>) -> HttpResponse {
    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    HttpResponse::Ok().json(body)
}

/// Handler for GET /api/v1/orders/orders
///
/// Staff only; regular accounts get 403 `unauthorized`.
pub async fn list_all_orders<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let orders = state.order_ledger.list_all(&actor).await?;
    Ok(order_list(orders))
}

/// Handler for GET /api/v1/orders/orders/{id}
pub async fn get_order<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let order = state.order_ledger.get(&actor, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// Handler for GET /api/v1/orders/user/orders
pub async fn list_user_orders<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let orders = state.order_ledger.list_for(&actor).await?;
    Ok(order_list(orders))
}

/// Handler for GET /api/v1/orders/user/order/{id}
///
/// Searches only the caller's own orders, so another account's order is
/// 404 here even for staff.
pub async fn get_user_order<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let order = state.order_ledger.get_own(&actor, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
