//! Authentication route handlers
//!
//! This module contains the account endpoints:
//! - Registration
//! - Login to an application
//! - Admin designation lookup

pub mod is_admin;
pub mod login;
pub mod register;

use actix_web::HttpResponse;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sso_core::errors::AuthResult;
use sso_core::repositories::{AppRepository, UserRepository};
use sso_core::services::auth::AuthService;
use sso_core::services::token::TokenIssuer;

use crate::handlers::{auth_error_response, deadline_exceeded_response};

/// Application state that holds shared services
pub struct AppState<U, A, T>
where
    U: UserRepository,
    A: AppRepository,
    T: TokenIssuer,
{
    pub auth_service: Arc<AuthService<U, A, T>>,
    /// Deadline applied to every service call
    pub request_timeout: Duration,
}

impl<U, A, T> AppState<U, A, T>
where
    U: UserRepository,
    A: AppRepository,
    T: TokenIssuer,
{
    pub fn new(auth_service: Arc<AuthService<U, A, T>>, request_timeout: Duration) -> Self {
        Self {
            auth_service,
            request_timeout,
        }
    }

    /// Run a service call under the request deadline
    ///
    /// Dropping the call on expiry cancels any storage work still pending.
    pub(crate) async fn call<R, F>(&self, operation: &'static str, fut: F) -> Result<R, HttpResponse>
    where
        F: Future<Output = AuthResult<R>>,
    {
        match tokio::time::timeout(self.request_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => Err(auth_error_response(&error)),
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = self.request_timeout.as_millis() as u64,
                    "request deadline exceeded"
                );
                Err(deadline_exceeded_response())
            }
        }
    }
}
