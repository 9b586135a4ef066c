//! SQLite implementation of the AppRepository trait.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use sso_core::domain::entities::app::App;
use sso_core::errors::StorageError;
use sso_core::repositories::AppRepository;

/// SQLite implementation of AppRepository
#[derive(Clone)]
pub struct SqliteAppRepository {
    pool: SqlitePool,
}

impl SqliteAppRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Provision an application
    ///
    /// Used for seeding; the service itself only reads apps.
    pub async fn create(&self, app: &App) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO apps (id, name, secret) VALUES (?, ?, ?)")
            .bind(app.id)
            .bind(&app.name)
            .bind(&app.secret)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Database(format!("Failed to create app: {}", e)))?;

        tracing::info!(app_id = app.id, name = %app.name, "app provisioned");
        Ok(())
    }

    fn row_to_app(row: &SqliteRow) -> Result<App, StorageError> {
        Ok(App {
            id: row
                .try_get("id")
                .map_err(|e| StorageError::Database(format!("Failed to get id: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| StorageError::Database(format!("Failed to get name: {}", e)))?,
            secret: row
                .try_get("secret")
                .map_err(|e| StorageError::Database(format!("Failed to get secret: {}", e)))?,
        })
    }
}

#[async_trait]
impl AppRepository for SqliteAppRepository {
    async fn app(&self, app_id: i32) -> Result<App, StorageError> {
        let row = sqlx::query("SELECT id, name, secret FROM apps WHERE id = ?")
            .bind(app_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database(format!("Database query failed: {}", e)))?
            .ok_or(StorageError::AppNotFound)?;

        Self::row_to_app(&row)
    }
}
