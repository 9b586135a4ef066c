//! In-memory implementation of AppRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::app::App;
use crate::errors::StorageError;

use super::trait_::AppRepository;

/// Mock app registry keyed by application id
#[derive(Clone, Default)]
pub struct MockAppRepository {
    apps: Arc<RwLock<HashMap<i32, App>>>,
}

impl MockAppRepository {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-provisioned with `apps`
    pub fn with_apps(apps: impl IntoIterator<Item = App>) -> Self {
        let apps = apps.into_iter().map(|app| (app.id, app)).collect();
        Self {
            apps: Arc::new(RwLock::new(apps)),
        }
    }

    /// Provision or replace an application
    pub async fn insert(&self, app: App) {
        self.apps.write().await.insert(app.id, app);
    }
}

#[async_trait]
impl AppRepository for MockAppRepository {
    async fn app(&self, app_id: i32) -> Result<App, StorageError> {
        let apps = self.apps.read().await;
        apps.get(&app_id).cloned().ok_or(StorageError::AppNotFound)
    }
}
