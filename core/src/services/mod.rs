//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, PasswordHasher, MAX_PASSWORD_BYTES};
pub use token::{decode_token, JwtTokenIssuer, TokenIssuer};
