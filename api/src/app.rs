//! Application factory
//!
//! Builds the Actix-web application around an already wired `AppState`.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use sso_core::repositories::{AppRepository, UserRepository};
use sso_core::services::token::TokenIssuer;
use sso_shared::{error_codes, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::routes::auth::{is_admin::is_admin, login::login, register::register, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, A, T>(
    app_state: web::Data<AppState<U, A, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    A: AppRepository + 'static,
    T: TokenIssuer + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Request spans for every call
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, A, T>))
                    .route("/login", web::post().to(login::<U, A, T>))
                    .route("/is-admin", web::post().to(is_admin::<U, A, T>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sso",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
