//! Domain error to HTTP response mapping
//!
//! Every `ErrorKind` has exactly one status code and one error code. The
//! mapping lives in `status_and_code` and nowhere else.

use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use po_core::errors::{DomainError, ErrorKind};
use po_shared::errors::{error_codes, ErrorResponse};

/// Status code and error code for an error kind
pub fn status_and_code(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::InvalidCredentials => (StatusCode::BAD_REQUEST, error_codes::INVALID_CREDENTIALS),
        ErrorKind::DuplicateUsername => (StatusCode::CONFLICT, error_codes::DUPLICATE_USERNAME),
        ErrorKind::DuplicateEmail => (StatusCode::CONFLICT, error_codes::DUPLICATE_EMAIL),
        ErrorKind::InvalidToken => (StatusCode::UNAUTHORIZED, error_codes::INVALID_TOKEN),
        ErrorKind::Unauthorized => (StatusCode::FORBIDDEN, error_codes::UNAUTHORIZED),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        ErrorKind::InvalidStatus => (StatusCode::UNPROCESSABLE_ENTITY, error_codes::INVALID_STATUS),
        ErrorKind::InvalidQuantity => {
            (StatusCode::UNPROCESSABLE_ENTITY, error_codes::INVALID_QUANTITY)
        }
        ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR),
    }
}

/// Client-facing message; token reasons and store details stay in the logs
fn client_message(error: &DomainError) -> String {
    match error.kind() {
        ErrorKind::InvalidToken => "Invalid or expired token".to_string(),
        ErrorKind::Internal => "An internal error occurred".to_string(),
        _ => error.to_string(),
    }
}

/// Handle domain errors and convert them to the matching HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code) = status_and_code(error.kind());

    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::warn!("Request rejected ({}): {}", code, error);
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, client_message(&error)))
}

/// Error type returned by handlers and extractors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body or path that could not be decoded into the expected shape
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_and_code(error.kind()).0,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error.clone()),
            ApiError::InvalidRequest(message) => {
                log::warn!("Request rejected ({}): {}", error_codes::INVALID_REQUEST, message);
                HttpResponse::BadRequest()
                    .json(ErrorResponse::new(error_codes::INVALID_REQUEST, message.clone()))
            }
        }
    }
}

fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidRequest(error.to_string()).into()
}

/// An unparseable id can never name a stored order
fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Unparseable path parameter: {}", error);
    ApiError::Domain(DomainError::order_not_found()).into()
}

/// JSON extractor configuration answering 400 `invalid_request`
pub fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler)
}

/// Path extractor configuration answering 404 `not_found`
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
