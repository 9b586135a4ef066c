//! Error taxonomy for the authentication service
//!
//! `AuthError` is what callers of the service see; it is matched by variant,
//! never by message text. `StorageError` and `TokenError` are collaborator
//! errors and are always translated before they cross the service boundary.

use sso_shared::error_codes;
use thiserror::Error;

/// Classified failures exposed by the authentication service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Malformed or missing input
    #[error("{message}")]
    InvalidArgument { field: String, message: String },

    /// Unknown email or wrong password; the two are indistinguishable
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user already exists")]
    UserExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid app id")]
    InvalidAppId,

    /// Opaque wrapper for every unexpected failure; details are only logged
    #[error("internal error")]
    Internal,
}

impl AuthError {
    /// A required input was empty
    pub fn invalid_argument(field: impl Into<String>) -> Self {
        let field = field.into();
        AuthError::InvalidArgument {
            message: format!("{} is required", field),
            field,
        }
    }

    /// An input exceeded `max` bytes
    pub fn argument_too_long(field: impl Into<String>, max: usize) -> Self {
        let field = field.into();
        AuthError::InvalidArgument {
            message: format!("{} must be at most {} bytes", field, max),
            field,
        }
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidArgument { .. } => error_codes::INVALID_ARGUMENT,
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::UserExists => error_codes::ALREADY_EXISTS,
            AuthError::UserNotFound => error_codes::NOT_FOUND,
            AuthError::InvalidAppId => error_codes::INVALID_APP_ID,
            AuthError::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

/// Conditions reported by credential store and app registry implementations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("user already exists")]
    UserExists,

    #[error("user not found")]
    UserNotFound,

    #[error("app not found")]
    AppNotFound,

    #[error("storage failure: {0}")]
    Database(String),
}

/// Token signing and verification failures
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    SigningFailed(#[source] jsonwebtoken::errors::Error),

    #[error("token expiry is out of range")]
    ExpiryOutOfRange,

    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Password hashing failures; never shown to callers
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}
