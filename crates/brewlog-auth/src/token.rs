//! JWT access-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(test)]
use serde::Serialize;

/// Audience every access token must carry.
const AUDIENCE: &str = "authenticated";

/// Errors returned by [`TokenValidator::validate`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("wrong audience")]
    WrongAudience,
    #[error("malformed token")]
    Malformed,
}

/// Claims payload carried by an access token.
///
/// `sub` is the user id; `email` and `role` are informational only and never
/// drive authorization decisions.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: u64,
    pub aud: String,
}

/// Opaque bearer-token validator.
///
/// HS256, expiration checked with the library's default leeway, audience
/// pinned to `authenticated`. Required claims: `sub`, `exp`, `aud`.
#[derive(Clone)]
pub struct TokenValidator {
    secret: String,
}

impl TokenValidator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_audience(&[AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::InvalidAudience => AuthError::WrongAudience,
            _ => AuthError::Malformed,
        })?;

        Ok(data.claims)
    }
}
