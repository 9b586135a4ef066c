//! Domain layer containing business entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{App, Claims, User, DEFAULT_TOKEN_TTL_SECONDS};
