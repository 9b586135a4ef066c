//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::StorageError;

use super::trait_::UserRepository;

#[derive(Default)]
struct State {
    users: Vec<User>,
    admins: HashSet<i64>,
    last_id: i64,
}

/// Mock user repository backed by a vector
///
/// Ids are assigned sequentially from 1, like an autoincrement column.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    state: Arc<RwLock<State>>,
}

impl MockUserRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant or revoke the admin designation; returns false for unknown ids
    pub async fn set_admin(&self, user_id: i64, is_admin: bool) -> bool {
        let mut state = self.state.write().await;
        if !state.users.iter().any(|u| u.id == user_id) {
            return false;
        }
        if is_admin {
            state.admins.insert(user_id);
        } else {
            state.admins.remove(&user_id);
        }
        true
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.state.read().await.users.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StorageError> {
        let mut state = self.state.write().await;

        if state.users.iter().any(|u| u.email == email) {
            return Err(StorageError::UserExists);
        }

        state.last_id += 1;
        let id = state.last_id;
        state.users.push(User::new(id, email, pass_hash));
        Ok(id)
    }

    async fn user(&self, email: &str) -> Result<User, StorageError> {
        let state = self.state.read().await;
        state
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError> {
        let state = self.state.read().await;
        if !state.users.iter().any(|u| u.id == user_id) {
            return Err(StorageError::UserNotFound);
        }
        Ok(state.admins.contains(&user_id))
    }
}
