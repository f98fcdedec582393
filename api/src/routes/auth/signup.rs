use actix_web::{web, HttpResponse};

use crate::dto::{AccountResponse, SignUpRequest};
use crate::handlers::ApiError;

use po_core::repositories::{OrderRepository, UserRepository};

use super::super::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// # Request Body
///
/// ```json
/// {
///     "username": "johndoe",
///     "email": "johndoe@example.com",
///     "password": "password"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// The account view, without the password digest. The account is always
/// regular and active; any `is_staff` or `is_active` in the body is ignored.
///
/// ## Errors
/// - 409 Conflict: `duplicate_username` or `duplicate_email`
/// - 400 Bad Request: `invalid_request` for an undecodable body
pub async fn signup<U, O>(
    state: web::Data<AppState<U, O>>,
    request: web::Json<SignUpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
{
    let SignUpRequest {
        username,
        email,
        password,
    } = request.into_inner();
    let account = state
        .auth_service
        .sign_up(&username, &email, &password)
        .await?;

    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}
