//! App repository trait defining the application registry contract.

use async_trait::async_trait;

use crate::domain::entities::app::App;
use crate::errors::StorageError;

/// Resolves application ids to their token-signing secrets
///
/// Applications are provisioned outside the service; this contract is
/// read-only.
#[async_trait]
pub trait AppRepository: Send + Sync {
    /// Fetch an application by id
    ///
    /// # Returns
    /// * `Ok(App)` - Application found
    /// * `Err(StorageError::AppNotFound)` - Unknown id
    /// * `Err(StorageError::Database)` - Any other storage failure
    async fn app(&self, app_id: i32) -> Result<App, StorageError>;
}
