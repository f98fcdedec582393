//! MySQL repository implementations

mod order_repository_impl;
mod user_repository_impl;

pub use order_repository_impl::MySqlOrderRepository;
pub use user_repository_impl::MySqlUserRepository;

use po_core::errors::DomainError;

/// Wrap a SQLx failure for the domain layer
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "{}", context);
    DomainError::internal(format!("{}: {}", context, error))
}
