use actix_web::{web, HttpResponse};
use validator::Validate;

use sso_core::repositories::{AppRepository, UserRepository};
use sso_core::services::token::TokenIssuer;

use crate::dto::{RegisterRequest, RegisterResponse};
use crate::handlers::validation_error_response;

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com", "password": "pw123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "user_id": 1 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed email, missing password
/// - 409 Conflict: Email already registered
/// - 500 Internal Server Error: Hashing or storage failure
/// - 504 Gateway Timeout: Request deadline exceeded
pub async fn register<U, A, T>(
    state: web::Data<AppState<U, A, T>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: AppRepository + 'static,
    T: TokenIssuer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, RegisterRequest::FIELDS);
    }

    let service = &state.auth_service;
    match state
        .call("register", service.register(&request.email, &request.password))
        .await
    {
        Ok(user_id) => HttpResponse::Ok().json(RegisterResponse { user_id }),
        Err(response) => response,
    }
}
