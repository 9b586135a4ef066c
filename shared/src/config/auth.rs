//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lowest bcrypt cost accepted by the hasher
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest bcrypt cost accepted by the hasher
pub const MAX_BCRYPT_COST: u32 = 31;

/// Token issuance and password hashing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Session token time-to-live in seconds, deployment-wide
    pub token_ttl: u64,

    /// bcrypt work factor; 10 hashes in roughly 100 ms on commodity hardware
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl: 3600,
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create a new auth configuration with the given TTL
    pub fn new(token_ttl: Duration) -> Self {
        Self {
            token_ttl: token_ttl.as_secs(),
            ..Default::default()
        }
    }

    /// Set the bcrypt cost
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl)
    }
}

fn default_bcrypt_cost() -> u32 {
    10
}
