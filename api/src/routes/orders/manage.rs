use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::{OrderRequest, OrderResponse, OrderStatusRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

use po_core::repositories::{OrderRepository, UserRepository};

use super::super::AppState;

/// Handler for POST /api/v1/orders/neworder
///
/// # Request Body
///
/// ```json
/// {
///     "quantity": 2,
///     "pizza_size": "LARGE"
/// }
/// ```
///
/// `pizza_size` defaults to `SMALL`. The new order is `PENDING` and owned
/// by the caller.
///
/// ## Errors
/// - 422 Unprocessable Entity: `invalid_quantity`
pub async fn place_order<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
    request: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let order = state
        .order_ledger
        .place(&actor, request.quantity, request.pizza_size)
        .await?;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// Handler for PUT /api/v1/orders/order/update/{id}
///
/// Replaces quantity and size; status is left untouched.
pub async fn update_order<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let order = state
        .order_ledger
        .update_fields(&actor, path.into_inner(), request.quantity, request.pizza_size)
        .await?;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// Handler for PATCH /api/v1/orders/order/status/{id}
///
/// Staff only.
///
/// ## Errors
/// - 403 Forbidden: `unauthorized` for regular accounts
/// - 422 Unprocessable Entity: `invalid_status`
pub async fn update_order_status<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<OrderStatusRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let order = state
        .order_ledger
        .set_status(&actor, path.into_inner(), &request.order_status)
        .await?;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// Handler for DELETE /api/v1/orders/order/delete/{id}
///
/// Responds with the snapshot of the removed order.
pub async fn delete_order<U, O>(
    state: web::Data<AppState<U, O>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let actor = state.actor(&auth).await?;
    let order = state.order_ledger.delete(&actor, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
