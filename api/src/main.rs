use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use po_api::{create_app, AppState};
use po_core::services::{
    AuthService, BcryptVerifier, OrderLedger, TokenService, TokenServiceConfig, UserDirectory,
};
use po_infra::database::{DatabasePool, MySqlOrderRepository, MySqlUserRepository};
use po_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env files before the PO_* variables are collected
    let config = AppConfig::load().context("Failed to load configuration")?;

    po_api::logging::init(&config.logging);

    info!(
        "Starting pizza orders API server ({:?} environment)",
        config.environment
    );

    config.validate().context("Refusing to start")?;
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT secret is a built-in default; set PO_AUTH__JWT__SECRET");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations()
        .await
        .context("Failed to apply database migrations")?;
    info!("{}", pool.get_statistics());

    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.auth.jwt))
            .context("Invalid JWT configuration")?,
    );

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let order_repository = Arc::new(MySqlOrderRepository::new(pool.get_pool().clone()));

    let directory = Arc::new(
        UserDirectory::new(user_repository, BcryptVerifier::default())
            .context("Failed to initialise the user directory")?,
    );
    let auth_service = Arc::new(AuthService::new(directory, token_service));
    let order_ledger = Arc::new(OrderLedger::new(order_repository));

    let app_state = web::Data::new(AppState::new(auth_service, order_ledger));
    let pool_data = web::Data::new(pool.clone());

    let bind_address = config.server.bind_address();
    let max_payload_size = config.server.max_payload_size;
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), max_payload_size).app_data(pool_data.clone())
    })
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
