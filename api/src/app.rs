//! Application factory
//!
//! Builds the actix-web `App` from already-initialised state, so the binary
//! and the integration tests assemble exactly the same routes. The binary
//! also registers its `DatabasePool` as app data for `/health`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use crate::handlers::error::{json_config, path_config};
use crate::middleware::JwtAuth;
use crate::routes::auth::{self, login::login, refresh::refresh, signup::signup};
use crate::routes::orders::{
    self, delete_order, get_order, get_user_order, list_all_orders, list_user_orders, place_order,
    update_order, update_order_status,
};
use crate::routes::AppState;

use po_core::repositories::{OrderRepository, UserRepository};
use po_infra::database::DatabasePool;
use po_shared::errors::{error_codes, ErrorResponse};

/// Create and configure the application with all dependencies
pub fn create_app<U, O>(
    app_state: web::Data<AppState<U, O>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let jwt = JwtAuth::new(app_state.auth_service.token_service().clone());

    App::new()
        .app_data(app_state)
        .app_data(json_config(max_payload_size))
        .app_data(path_config())
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .service(
                            web::resource("/")
                                .wrap(jwt.clone())
                                .route(web::get().to(auth::hello)),
                        )
                        .route("/signup", web::post().to(signup::<U, O>))
                        .route("/login", web::post().to(login::<U, O>))
                        .route("/refresh", web::get().to(refresh::<U, O>)),
                )
                .service(
                    web::scope("/orders")
                        .wrap(jwt)
                        .route("/", web::get().to(orders::hello))
                        .route("/neworder", web::post().to(place_order::<U, O>))
                        .route("/orders", web::get().to(list_all_orders::<U, O>))
                        .route("/orders/{id}", web::get().to(get_order::<U, O>))
                        .route("/user/orders", web::get().to(list_user_orders::<U, O>))
                        .route("/user/order/{id}", web::get().to(get_user_order::<U, O>))
                        .route("/order/update/{id}", web::put().to(update_order::<U, O>))
                        .route(
                            "/order/status/{id}",
                            web::patch().to(update_order_status::<U, O>),
                        )
                        .route(
                            "/order/delete/{id}",
                            web::delete().to(delete_order::<U, O>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Pings the database when a pool is registered and answers 503 when the
/// ping fails.
async fn health_check(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let database = match pool {
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            Ok(false) | Err(_) => "down",
        },
        None => "not_configured",
    };

    let healthy = database != "down";
    let body = serde_json::json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "database": database,
        "service": "pizza-orders-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
