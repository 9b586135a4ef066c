use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use sso_core::MAX_PASSWORD_BYTES;
use sso_shared::validation::validators::{is_valid_email, not_empty};

/// Missing fields deserialize to their zero value and are then reported
/// as "<field> is required" by validation, not as a JSON parse error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom = "validate_email")]
    pub email: String,

    #[serde(default)]
    #[validate(custom = "validate_password")]
    pub password: String,
}

impl RegisterRequest {
    /// Field order used when reporting validation failures
    pub const FIELDS: &'static [&'static str] = &["email", "password"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom = "validate_email")]
    pub email: String,

    #[serde(default)]
    #[validate(custom = "validate_password")]
    pub password: String,

    /// Application to issue the token for; 0 means absent
    #[serde(default)]
    #[validate(range(min = 1, message = "app_id is required"))]
    pub app_id: i32,
}

impl LoginRequest {
    pub const FIELDS: &'static [&'static str] = &["email", "password", "app_id"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IsAdminRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i64,
}

impl IsAdminRequest {
    pub const FIELDS: &'static [&'static str] = &["user_id"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let (code, message) = if !not_empty(email) {
        ("required", "email is required")
    } else if !is_valid_email(email) {
        ("email", "email is invalid")
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    Err(error)
}

/// Length is counted in bytes, the unit bcrypt truncates at
fn validate_password(password: &str) -> Result<(), ValidationError> {
    let (code, message) = if password.is_empty() {
        ("required", Cow::Borrowed("password is required"))
    } else if password.len() > MAX_PASSWORD_BYTES {
        (
            "length",
            Cow::Owned(format!("password must be at most {} bytes", MAX_PASSWORD_BYTES)),
        )
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new(code);
    error.message = Some(message);
    Err(error)
}
