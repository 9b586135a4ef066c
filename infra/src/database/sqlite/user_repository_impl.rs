//! SQLite implementation of the UserRepository trait.
//!
//! Emails are unique at the schema level, so duplicate registrations are
//! detected by the insert itself rather than a racy pre-check.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use sso_core::domain::entities::user::User;
use sso_core::errors::StorageError;
use sso_core::repositories::UserRepository;

/// SQLite implementation of UserRepository
#[derive(Clone)]
pub struct SqliteUserRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SQLite user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Grant or revoke the admin designation
    ///
    /// Admins are managed out of band; the service never calls this.
    ///
    /// # Returns
    /// * `Err(StorageError::UserNotFound)` - No user with this id
    pub async fn set_admin(&self, user_id: i64, is_admin: bool) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE users SET is_admin = ? WHERE id = ?")
            .bind(is_admin)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Database(format!("Failed to update admin flag: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::UserNotFound);
        }
        Ok(())
    }

    /// Convert database row to User entity
    fn row_to_user(row: &SqliteRow) -> Result<User, StorageError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| StorageError::Database(format!("Failed to get id: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| StorageError::Database(format!("Failed to get email: {}", e)))?,
            pass_hash: row
                .try_get("pass_hash")
                .map_err(|e| StorageError::Database(format!("Failed to get pass_hash: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO users (email, pass_hash) VALUES (?, ?)")
            .bind(email)
            .bind(pass_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => StorageError::UserExists,
                other => StorageError::Database(format!("Failed to save user: {}", other)),
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn user(&self, email: &str) -> Result<User, StorageError> {
        let row = sqlx::query("SELECT id, email, pass_hash FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database(format!("Database query failed: {}", e)))?
            .ok_or(StorageError::UserNotFound)?;

        Self::row_to_user(&row)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError> {
        sqlx::query_scalar::<_, bool>("SELECT is_admin FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database(format!("Database query failed: {}", e)))?
            .ok_or(StorageError::UserNotFound)
    }
}
