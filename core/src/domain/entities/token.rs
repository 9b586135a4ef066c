//! Claims carried by per-application session tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::app::App;
use super::user::User;

/// Default session token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 3600;

/// Claims structure for the JWT payload
///
/// The wire names (`uid`, `email`, `app_id`, `exp`) are what downstream
/// verifiers read; do not rename them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub uid: i64,

    /// Subject email at issuance time
    pub email: String,

    /// Application the token was issued for
    pub app_id: i32,

    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user` logging in to `app`, expiring `ttl` after `issued_at`
    ///
    /// Returns `None` if the expiry does not fit in a Unix timestamp.
    pub fn new(user: &User, app: &App, issued_at: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(ttl)?;
        Some(Self {
            uid: user.id,
            email: user.email.clone(),
            app_id: app.id,
            exp: expires_at.timestamp(),
        })
    }
}
