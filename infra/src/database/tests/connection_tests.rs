//! Unit tests for database connection pool

use std::path::PathBuf;

use sso_shared::config::DatabaseConfig;

use crate::database::connection::{database_file, DatabasePool, PoolStatistics};
use crate::InfrastructureError;

fn memory_config() -> DatabaseConfig {
    DatabaseConfig::new("sqlite::memory:").with_max_connections(1)
}

#[tokio::test]
async fn test_pool_creation_with_invalid_url() {
    for url in ["invalid://url", "mysql://localhost/sso", "storage/sso.db"] {
        let result = DatabasePool::new(DatabaseConfig::new(url)).await;
        assert!(
            matches!(result, Err(InfrastructureError::Config(_))),
            "{} should be rejected as configuration",
            url
        );
    }
}

#[tokio::test]
async fn test_pool_health_check() {
    let pool = DatabasePool::new(memory_config()).await.unwrap();
    assert_eq!(pool.config().url, "sqlite::memory:");
    assert!(pool.health_check().await.unwrap());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = DatabasePool::new(memory_config()).await.unwrap();

    pool.run_migrations().await.unwrap();
    pool.run_migrations().await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'apps') ORDER BY name",
    )
    .fetch_all(pool.get_pool())
    .await
    .unwrap();
    assert_eq!(tables, vec!["apps", "users"]);
}

#[tokio::test]
async fn test_memory_pool_is_single_connection() {
    let pool = DatabasePool::new(DatabaseConfig::new("sqlite::memory:")).await.unwrap();
    assert_eq!(pool.get_statistics().max_connections, 1);
}

#[test]
fn test_database_file_from_url() {
    assert_eq!(
        database_file("sqlite://storage/sso.db"),
        Some(PathBuf::from("storage/sso.db"))
    );
    assert_eq!(
        database_file("sqlite:data.db?mode=rwc"),
        Some(PathBuf::from("data.db"))
    );
    assert_eq!(database_file("sqlite::memory:"), None);
    assert_eq!(database_file("mysql://localhost/sso"), None);
}

#[test]
fn test_pool_statistics_display() {
    let stats = PoolStatistics {
        connections: 5,
        idle_connections: 3,
        max_connections: 10,
    };

    let display = format!("{}", stats);
    assert!(display.contains("5/10"));
    assert!(display.contains("3 idle"));
}
