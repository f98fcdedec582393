//! Route handlers and the state they share

pub mod auth;
pub mod orders;

use std::sync::Arc;

use po_core::domain::entities::account::Account;
use po_core::errors::DomainResult;
use po_core::repositories::{OrderRepository, UserRepository};
use po_core::services::{AuthService, OrderLedger};

use crate::middleware::AuthContext;

/// Application state shared by every worker
pub struct AppState<U, O>
where
    U: UserRepository,
    O: OrderRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub order_ledger: Arc<OrderLedger<O>>,
}

impl<U, O> AppState<U, O>
where
    U: UserRepository,
    O: OrderRepository,
{
    pub fn new(auth_service: Arc<AuthService<U>>, order_ledger: Arc<OrderLedger<O>>) -> Self {
        Self {
            auth_service,
            order_ledger,
        }
    }

    /// Load the account behind an authenticated request
    pub async fn actor(&self, auth: &AuthContext) -> DomainResult<Account> {
        self.auth_service.resolve_subject(&auth.subject).await
    }
}
