use actix_web::{web, HttpResponse};
use validator::Validate;

use sso_core::repositories::{AppRepository, UserRepository};
use sso_core::services::token::TokenIssuer;

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::validation_error_response;

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com", "password": "pw123456", "app_id": 1 }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// The token is signed with the secret of `app_id` and is only valid there.
///
/// ## Errors
/// - 400 Bad Request: Invalid input (`INVALID_ARGUMENT`) or unknown app (`INVALID_APP_ID`)
/// - 401 Unauthorized: Unknown email or wrong password
/// - 500 Internal Server Error: Storage or signing failure
/// - 504 Gateway Timeout: Request deadline exceeded
pub async fn login<U, A, T>(
    state: web::Data<AppState<U, A, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: AppRepository + 'static,
    T: TokenIssuer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, LoginRequest::FIELDS);
    }

    let service = &state.auth_service;
    match state
        .call(
            "login",
            service.login(&request.email, &request.password, request.app_id),
        )
        .await
    {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(response) => response,
    }
}
