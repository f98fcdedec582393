//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use po_api::AppState;
use po_core::domain::entities::account::{Account, NewAccount};
use po_core::repositories::{InMemoryOrderRepository, InMemoryUserRepository};
use po_core::services::{
    AuthService, BcryptVerifier, OrderLedger, TokenService, TokenServiceConfig, UserDirectory,
};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const MAX_PAYLOAD: usize = 64 * 1024;
pub const PASSWORD: &str = "password123";

pub type TestState = AppState<InMemoryUserRepository, InMemoryOrderRepository>;

/// Fresh state over empty in-memory stores
pub fn test_state() -> web::Data<TestState> {
    let token_service =
        Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap());
    let directory = Arc::new(
        UserDirectory::new(Arc::new(InMemoryUserRepository::new()), BcryptVerifier::new(4))
            .unwrap(),
    );
    let auth_service = Arc::new(AuthService::new(directory, token_service));
    let order_ledger = Arc::new(OrderLedger::new(Arc::new(InMemoryOrderRepository::new())));

    web::Data::new(AppState::new(auth_service, order_ledger))
}

/// Create an account directly through the core
pub async fn seed_account(state: &TestState, username: &str, staff: bool) -> Account {
    let mut new_account =
        NewAccount::new(username, format!("{}@example.com", username), PASSWORD);
    if staff {
        new_account = new_account.staff();
    }
    state
        .auth_service
        .directory()
        .create_with(new_account)
        .await
        .unwrap()
}

pub fn access_token(state: &TestState, username: &str) -> String {
    state
        .auth_service
        .token_service()
        .issue_access(username)
        .unwrap()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
