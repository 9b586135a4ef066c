//! User entity representing a registered account.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user as seen by the authentication service
///
/// `pass_hash` is an opaque bcrypt string; the plaintext password never
/// leaves the service that hashed it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, unique and stable
    pub id: i64,

    /// Login email, unique and immutable
    pub email: String,

    /// bcrypt hash of the user's password
    #[serde(skip_serializing)]
    pub pass_hash: String,
}

impl User {
    /// Creates a new User instance
    pub fn new(id: i64, email: impl Into<String>, pass_hash: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            pass_hash: pass_hash.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("pass_hash", &"<redacted>")
            .finish()
    }
}
