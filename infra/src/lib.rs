//! # Infrastructure Layer
//!
//! Concrete storage for the SSO service. The core crate only knows the
//! `UserRepository` and `AppRepository` traits; this crate backs them with
//! SQLite through SQLx.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, embedded migrations, health checks
//! - **Repositories**: SQLite implementations of the core storage contracts

pub mod database;

pub use database::{DatabasePool, PoolStatistics, SqliteAppRepository, SqliteUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
