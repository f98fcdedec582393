use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::AccessTokenResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::bearer_token;

use po_core::errors::TokenError;
use po_core::repositories::{OrderRepository, UserRepository};

use super::super::AppState;

/// Handler for GET /api/v1/auth/refresh
///
/// Exchanges the bearer refresh token for a new access token. The refresh
/// token itself is not rotated.
///
/// ## Success (200 OK)
/// ```json
/// { "access": "eyJ..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, expired, or non-refresh token
pub async fn refresh<U, O>(state: web::Data<AppState<U, O>>, req: HttpRequest) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let Some(token) = bearer_token(req.headers()) else {
        return handle_domain_error(TokenError::Malformed.into());
    };

    match state.auth_service.refresh(&token) {
        Ok(access) => HttpResponse::Ok().json(AccessTokenResponse { access }),
        Err(error) => handle_domain_error(error),
    }
}
