//! Authentication route handlers
//!
//! This module contains the account endpoints:
//! - Sign-up
//! - Login (access and refresh token issuance)
//! - Access token refresh
//! - An authenticated hello for token smoke tests

pub mod login;
pub mod refresh;
pub mod signup;

use actix_web::HttpResponse;

use crate::dto::MessageResponse;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/auth/
pub async fn hello(_auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("hello world"))
}
