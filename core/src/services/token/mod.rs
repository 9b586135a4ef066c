//! Token issuance module
//!
//! Session tokens are compact HS256 JWTs signed with the secret of the
//! application the user logged in to. The lifetime is fixed when the issuer
//! is built.

mod service;

#[cfg(test)]
mod tests;

pub use service::{decode_token, JwtTokenIssuer, TokenIssuer};
