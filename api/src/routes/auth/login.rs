use actix_web::{web, HttpResponse};

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;

use po_core::repositories::{OrderRepository, UserRepository};

use super::super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access": "eyJ...",
///     "refresh": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `invalid_credentials` for an unknown user, an inactive
///   account, or a wrong password alike
pub async fn login<U, O>(
    state: web::Data<AppState<U, O>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(LoginResponse {
            access: pair.access_token,
            refresh: pair.refresh_token,
        }),
        Err(error) => handle_domain_error(error),
    }
}
