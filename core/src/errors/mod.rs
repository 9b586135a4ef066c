//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, PasswordError, StorageError, TokenError};

/// Result of an authentication service operation
pub type AuthResult<T> = Result<T, AuthError>;
