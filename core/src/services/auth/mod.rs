//! Authentication service module
//!
//! This module provides the three account operations of the SSO service:
//! - User registration with bcrypt password hashing
//! - Login producing a per-application session token
//! - Admin designation lookup

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{PasswordHasher, MAX_PASSWORD_BYTES};
pub use service::AuthService;
