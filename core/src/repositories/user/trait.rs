//! User repository trait defining the credential store contract.
//!
//! The authentication service depends only on this trait; the SQLite
//! implementation lives in the infrastructure crate and the in-memory one
//! in `mock.rs`. Implementations must be safe for concurrent use.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::StorageError;

/// Repository trait for user credential persistence
///
/// Every method is a cancellable future: dropping it (for example when a
/// caller's deadline fires) abandons the underlying query.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sso_core::domain::entities::user::User;
/// use sso_core::errors::StorageError;
/// use sso_core::repositories::UserRepository;
///
/// struct SqliteUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for SqliteUserRepository {
///     async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StorageError> {
///         // INSERT INTO users ...
///         Ok(1)
///     }
///
///     // ... other methods
/// #   async fn user(&self, email: &str) -> Result<User, StorageError> { Err(StorageError::UserNotFound) }
/// #   async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError> { Ok(false) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return its assigned id
    ///
    /// # Returns
    /// * `Ok(id)` - User created
    /// * `Err(StorageError::UserExists)` - Email already registered; nothing stored
    /// * `Err(StorageError::Database)` - Any other storage failure
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StorageError>;

    /// Fetch a user by email
    ///
    /// # Returns
    /// * `Ok(User)` - User found
    /// * `Err(StorageError::UserNotFound)` - No user with this email
    /// * `Err(StorageError::Database)` - Any other storage failure
    async fn user(&self, email: &str) -> Result<User, StorageError>;

    /// Whether the user holds the admin designation
    ///
    /// # Returns
    /// * `Ok(bool)` - Admin flag of an existing user
    /// * `Err(StorageError::UserNotFound)` - No user with this id
    /// * `Err(StorageError::Database)` - Any other storage failure
    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError>;
}
