//! # SSO Core
//!
//! Core authentication logic and domain layer for the SSO service.
//! This crate contains domain entities, the authentication and token
//! services, repository interfaces, and the error types that classify
//! every failure crossing the service boundary.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{App, Claims, User, DEFAULT_TOKEN_TTL_SECONDS};
pub use errors::{AuthError, AuthResult, PasswordError, StorageError, TokenError};
pub use repositories::{AppRepository, MockAppRepository, MockUserRepository, UserRepository};
pub use services::{
    decode_token, AuthService, AuthServiceConfig, JwtTokenIssuer, PasswordHasher, TokenIssuer,
    MAX_PASSWORD_BYTES,
};
