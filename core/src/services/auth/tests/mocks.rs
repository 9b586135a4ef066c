//! Failing collaborators for exercising the service's error translation

use async_trait::async_trait;

use crate::domain::entities::app::App;
use crate::domain::entities::user::User;
use crate::errors::{StorageError, TokenError};
use crate::repositories::{AppRepository, UserRepository};
use crate::services::token::TokenIssuer;

/// User repository whose every call fails with a storage error
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn save_user(&self, _email: &str, _pass_hash: &str) -> Result<i64, StorageError> {
        Err(StorageError::Database("connection refused".to_string()))
    }

    async fn user(&self, _email: &str) -> Result<User, StorageError> {
        Err(StorageError::Database("connection refused".to_string()))
    }

    async fn is_admin(&self, _user_id: i64) -> Result<bool, StorageError> {
        Err(StorageError::Database("connection refused".to_string()))
    }
}

/// App repository whose every call fails with a storage error
pub struct FailingAppRepository;

#[async_trait]
impl AppRepository for FailingAppRepository {
    async fn app(&self, _app_id: i32) -> Result<App, StorageError> {
        Err(StorageError::Database("connection refused".to_string()))
    }
}

/// Token issuer that cannot sign
pub struct FailingTokenIssuer;

impl TokenIssuer for FailingTokenIssuer {
    fn issue(&self, _user: &User, _app: &App) -> Result<String, TokenError> {
        Err(TokenError::ExpiryOutOfRange)
    }
}

/// Token issuer returning a fixed string, for checking call wiring
pub struct StaticTokenIssuer(pub &'static str);

impl TokenIssuer for StaticTokenIssuer {
    fn issue(&self, _user: &User, _app: &App) -> Result<String, TokenError> {
        Ok(self.0.to_string())
    }
}
