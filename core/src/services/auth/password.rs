//! bcrypt hashing off the async executor

use once_cell::sync::OnceCell;
use std::sync::Arc;
use tokio::task;

use crate::errors::PasswordError;

const DUMMY_PASSWORD: &str = "sso-timing-equalisation";

/// bcrypt ignores everything past this many bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes and verifies passwords on the blocking thread pool
///
/// Also keeps a reference hash at the same cost, so a login for an unknown
/// email can burn the same amount of work as a real check. It is built by
/// [`PasswordHasher::warm_up`], or by the first dummy verification if the
/// owner never warmed up.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<OnceCell<String>>,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Build the reference hash used by [`PasswordHasher::verify_dummy`]
    pub async fn warm_up(&self) -> Result<(), PasswordError> {
        let cost = self.cost;
        let dummy_hash = Arc::clone(&self.dummy_hash);

        task::spawn_blocking(move || -> Result<(), bcrypt::BcryptError> {
            dummy_hash.get_or_try_init(|| bcrypt::hash(DUMMY_PASSWORD, cost))?;
            Ok(())
        })
        .await??;

        Ok(())
    }

    pub(crate) fn is_warm(&self) -> bool {
        self.dummy_hash.get().is_some()
    }

    /// Hash `password` with a fresh salt
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hash = task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }

    /// Check `password` against a stored hash
    ///
    /// A malformed hash is an error, not a mismatch.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let matches = task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(matches)
    }

    /// Run a verification whose result is discarded
    pub async fn verify_dummy(&self, password: &str) -> Result<(), PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let dummy_hash = Arc::clone(&self.dummy_hash);

        task::spawn_blocking(move || -> Result<(), bcrypt::BcryptError> {
            let hash = dummy_hash.get_or_try_init(|| bcrypt::hash(DUMMY_PASSWORD, cost))?;
            bcrypt::verify(password, hash)?;
            Ok(())
        })
        .await??;

        Ok(())
    }
}
