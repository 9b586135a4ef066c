use actix_web::{web, HttpResponse};
use validator::Validate;

use sso_core::repositories::{AppRepository, UserRepository};
use sso_core::services::token::TokenIssuer;

use crate::dto::{IsAdminRequest, IsAdminResponse};
use crate::handlers::validation_error_response;

use super::AppState;

/// Handler for POST /api/v1/auth/is-admin
///
/// ## Success (200 OK)
/// ```json
/// { "is_admin": false }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or non-positive `user_id`
/// - 404 Not Found: No such user
/// - 500 Internal Server Error: Storage failure
/// - 504 Gateway Timeout: Request deadline exceeded
pub async fn is_admin<U, A, T>(
    state: web::Data<AppState<U, A, T>>,
    request: web::Json<IsAdminRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: AppRepository + 'static,
    T: TokenIssuer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, IsAdminRequest::FIELDS);
    }

    let service = &state.auth_service;
    match state
        .call("is_admin", service.is_admin(request.user_id))
        .await
    {
        Ok(is_admin) => HttpResponse::Ok().json(IsAdminResponse { is_admin }),
        Err(response) => response,
    }
}
