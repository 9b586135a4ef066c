use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};

use sso_core::errors::AuthError;
use sso_shared::validation::ValidationErrors;
use sso_shared::{error_codes, ErrorResponse};

/// HTTP status for each service error kind
pub fn status_for(error: &AuthError) -> StatusCode {
    match error {
        AuthError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::UserExists => StatusCode::CONFLICT,
        AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::InvalidAppId => StatusCode::BAD_REQUEST,
        AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn to_response(status: StatusCode, body: ErrorResponse) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

/// Map a service error to its HTTP response
///
/// `Internal` carries only the fixed message; details were logged where
/// the failure was detected.
pub fn auth_error_response(error: &AuthError) -> HttpResponse {
    to_response(
        status_for(error),
        ErrorResponse::new(error.code(), error.to_string()),
    )
}

/// 400 response for a request body that failed validation
///
/// `fields` fixes the order in which offending fields are reported, so the
/// top-level message always names the first one.
pub fn validation_error_response(
    errors: &validator::ValidationErrors,
    fields: &[&str],
) -> HttpResponse {
    let field_errors = errors.field_errors();
    let mut collected = ValidationErrors::new();

    for field in fields {
        if let Some(list) = field_errors.get(*field) {
            for error in list.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                collected.add_error(*field, message, error.code.to_string());
            }
        }
    }

    let message = collected
        .first_message()
        .unwrap_or("invalid request")
        .to_string();

    to_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse::new(error_codes::INVALID_ARGUMENT, message)
            .add_detail("fields", collected.to_field_errors()),
    )
}

/// 504 response when a service call outlives the request deadline
pub fn deadline_exceeded_response() -> HttpResponse {
    to_response(
        StatusCode::GATEWAY_TIMEOUT,
        ErrorResponse::new(error_codes::DEADLINE_EXCEEDED, "deadline exceeded"),
    )
}

/// JSON extractor error handler producing the standard error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected malformed request body");

    let response = to_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse::new(error_codes::INVALID_ARGUMENT, "malformed request body")
            .add_detail("reason", err.to_string()),
    );
    InternalError::from_response(err, response).into()
}
