//! Main authentication service implementation

use std::sync::Arc;
use tracing::{Instrument, Span};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, AuthResult, StorageError};
use crate::repositories::{AppRepository, UserRepository};
use crate::services::token::TokenIssuer;

use super::config::AuthServiceConfig;
use super::password::{PasswordHasher, MAX_PASSWORD_BYTES};

/// Authentication service for registration, login and admin checks
///
/// Every operation runs inside a child of the span handed to [`AuthService::new`],
/// so log output is attributed to whatever the owner decided that span means
/// (a deployment, a tenant, a test case). Passing `Span::none()` silences it.
pub struct AuthService<U, A, T>
where
    U: UserRepository,
    A: AppRepository,
    T: TokenIssuer,
{
    /// Credential store
    user_repository: Arc<U>,
    /// Application registry
    app_repository: Arc<A>,
    /// Session token issuer
    token_issuer: Arc<T>,
    /// bcrypt hashing on the blocking pool
    hasher: PasswordHasher,
    /// Parent span for per-operation spans
    span: Span,
}

impl<U, A, T> AuthService<U, A, T>
where
    U: UserRepository,
    A: AppRepository,
    T: TokenIssuer,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Credential store
    /// * `app_repository` - Application registry resolving signing secrets
    /// * `token_issuer` - Issuer whose TTL is already fixed
    /// * `config` - Service configuration
    /// * `span` - Parent span for all log output of this service
    pub fn new(
        user_repository: Arc<U>,
        app_repository: Arc<A>,
        token_issuer: Arc<T>,
        config: AuthServiceConfig,
        span: Span,
    ) -> Self {
        Self {
            user_repository,
            app_repository,
            token_issuer,
            hasher: PasswordHasher::new(config.bcrypt_cost),
            span,
        }
    }

    /// Build the reference hash for unknown-email logins ahead of the first request
    ///
    /// Without this the first such login also pays for building it.
    pub async fn warm_up(&self) -> AuthResult<()> {
        self.hasher.warm_up().await.map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, "failed to build reference hash");
            AuthError::Internal
        })
    }

    /// Register a new user
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - Id assigned to the new user
    /// * `Err(AuthError::InvalidArgument)` - Empty email or password, or a
    ///   password longer than [`MAX_PASSWORD_BYTES`]
    /// * `Err(AuthError::UserExists)` - Email already registered; nothing stored
    /// * `Err(AuthError::Internal)` - Hashing or storage failure
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<i64> {
        let span = tracing::info_span!(parent: &self.span, "register", op = "auth.register");
        self.register_user(email, password).instrument(span).await
    }

    /// Log a user in to an application
    ///
    /// An unknown email and a wrong password produce the same error, and an
    /// unknown email still pays for one bcrypt verification.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Token signed with the application's secret
    /// * `Err(AuthError::InvalidArgument)` - Empty email or password, or a
    ///   password longer than [`MAX_PASSWORD_BYTES`]
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// * `Err(AuthError::InvalidAppId)` - Credentials valid, application unknown
    /// * `Err(AuthError::Internal)` - Storage, hashing or signing failure
    pub async fn login(&self, email: &str, password: &str, app_id: i32) -> AuthResult<String> {
        let span = tracing::info_span!(parent: &self.span, "login", op = "auth.login", app_id);
        self.login_user(email, password, app_id).instrument(span).await
    }

    /// Whether the user holds the admin designation
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Admin flag
    /// * `Err(AuthError::UserNotFound)` - No such user
    /// * `Err(AuthError::Internal)` - Storage failure
    pub async fn is_admin(&self, user_id: i64) -> AuthResult<bool> {
        let span = tracing::info_span!(parent: &self.span, "is_admin", op = "auth.is_admin", user_id);
        self.check_admin(user_id).instrument(span).await
    }

    async fn register_user(&self, email: &str, password: &str) -> AuthResult<i64> {
        require("email", email)?;
        check_password(password)?;

        tracing::debug!(email, "registering user");

        let pass_hash = self.hasher.hash(password).await.map_err(|e| {
            tracing::error!(error = %e, "failed to generate password hash");
            AuthError::Internal
        })?;

        let user_id = self
            .user_repository
            .save_user(email, &pass_hash)
            .await
            .map_err(|e| match e {
                StorageError::UserExists => {
                    tracing::warn!("user already exists");
                    AuthError::UserExists
                }
                other => {
                    tracing::error!(error = %other, "failed to save user");
                    AuthError::Internal
                }
            })?;

        tracing::info!(user_id, "user registered");
        Ok(user_id)
    }

    async fn login_user(&self, email: &str, password: &str, app_id: i32) -> AuthResult<String> {
        require("email", email)?;
        check_password(password)?;

        tracing::debug!(email, "attempting to login user");

        let user = self.verified_user(email, password).await?;

        let app = self.app_repository.app(app_id).await.map_err(|e| match e {
            StorageError::AppNotFound => {
                tracing::warn!("app not found");
                AuthError::InvalidAppId
            }
            other => {
                tracing::error!(error = %other, "failed to get app");
                AuthError::Internal
            }
        })?;

        let token = self.token_issuer.issue(&user, &app).map_err(|e| {
            tracing::error!(error = %e, "failed to generate token");
            AuthError::Internal
        })?;

        tracing::info!(user_id = user.id, "user logged in successfully");
        Ok(token)
    }

    async fn check_admin(&self, user_id: i64) -> AuthResult<bool> {
        let is_admin = self
            .user_repository
            .is_admin(user_id)
            .await
            .map_err(|e| match e {
                StorageError::UserNotFound => {
                    tracing::warn!("user not found");
                    AuthError::UserNotFound
                }
                other => {
                    tracing::error!(error = %other, "failed to check if user is admin");
                    AuthError::Internal
                }
            })?;

        tracing::info!(is_admin, "checked if user is admin");
        Ok(is_admin)
    }

    /// Fetch the user and check the password, collapsing both misses
    async fn verified_user(&self, email: &str, password: &str) -> AuthResult<User> {
        let user = match self.user_repository.user(email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                if let Err(e) = self.hasher.verify_dummy(password).await {
                    tracing::error!(error = %e, "dummy password verification failed");
                }
                tracing::warn!("user not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to get user");
                return Err(AuthError::Internal);
            }
        };

        let matches = self
            .hasher
            .verify(password, &user.pass_hash)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = user.id, "stored password hash is unusable");
                AuthError::Internal
            })?;

        if !matches {
            tracing::info!(user_id = user.id, "invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

fn require(field: &str, value: &str) -> AuthResult<()> {
    if value.is_empty() {
        return Err(AuthError::invalid_argument(field));
    }
    Ok(())
}

/// bcrypt would silently drop the tail of a longer password
fn check_password(password: &str) -> AuthResult<()> {
    require("password", password)?;
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AuthError::argument_too_long("password", MAX_PASSWORD_BYTES));
    }
    Ok(())
}
