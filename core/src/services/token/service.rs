//! JWT token issuer implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::app::App;
use crate::domain::entities::token::{Claims, DEFAULT_TOKEN_TTL_SECONDS};
use crate::domain::entities::user::User;
use crate::errors::TokenError;

/// Produces signed session tokens for a (user, app) pair
///
/// Implementations must be pure with respect to their inputs apart from the
/// clock, and safe to share between tasks.
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `user` that is valid for `app` only
    fn issue(&self, user: &User, app: &App) -> Result<String, TokenError>;
}

/// HS256 issuer with a deployment-wide time-to-live
#[derive(Debug, Clone)]
pub struct JwtTokenIssuer {
    ttl: Duration,
}

impl Default for JwtTokenIssuer {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS as i64))
    }
}

impl JwtTokenIssuer {
    /// Creates an issuer whose tokens expire `ttl` after issuance
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Creates an issuer from a std duration, as read from configuration
    ///
    /// # Returns
    ///
    /// * `Err(TokenError::ExpiryOutOfRange)` - `ttl` does not fit a signed duration
    pub fn from_std(ttl: std::time::Duration) -> Result<Self, TokenError> {
        let ttl = Duration::from_std(ttl).map_err(|_| TokenError::ExpiryOutOfRange)?;
        Ok(Self::new(ttl))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token as if the current time were `issued_at`
    pub fn issue_at(
        &self,
        user: &User,
        app: &App,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims =
            Claims::new(user, app, issued_at, self.ttl).ok_or(TokenError::ExpiryOutOfRange)?;

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(app.secret.as_bytes()),
        )
        .map_err(TokenError::SigningFailed)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User, app: &App) -> Result<String, TokenError> {
        self.issue_at(user, app, Utc::now())
    }
}

/// Verifies a token with the exact secret of the app it claims to be for
///
/// Signature and expiry are both checked with no leeway.
///
/// # Returns
///
/// * `Ok(Claims)` - Token is authentic and unexpired
/// * `Err(TokenError::Expired)` - Signature valid but `exp` has passed
/// * `Err(TokenError::Invalid)` - Malformed, wrong algorithm or wrong secret
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = true;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e),
        })
}
