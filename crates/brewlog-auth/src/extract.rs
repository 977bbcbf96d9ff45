//! Axum extractors for authenticated identity.

use std::convert::Infallible;

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use http::request::Parts;
use http::{StatusCode, header};

use crate::token::TokenValidator;

/// Identity of the authenticated caller, extracted from the bearer token.
///
/// `email` and `role` come straight from the token claims and are attached for
/// logging/display only; authorization decisions use `user_id` alone.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Rejection for required-auth routes: 401 with the uniform error envelope.
#[derive(Debug)]
pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": "UNAUTHORIZED",
                "message": "missing or invalid credentials",
                "status_code": 401,
            }
        });
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(body),
        )
            .into_response()
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn validate(parts: &Parts, validator: &TokenValidator) -> Option<Identity> {
    let token = bearer_token(parts)?;
    let claims = validator.validate(token).ok()?;
    Some(Identity {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    TokenValidator: FromRef<S>,
{
    type Rejection = Unauthorized;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let validator = TokenValidator::from_ref(state);
        let identity = validate(parts, &validator);
        async move { identity.ok_or(Unauthorized) }
    }
}

/// Optional-auth extractor: yields `None` for a missing or invalid credential
/// instead of rejecting the request.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
    TokenValidator: FromRef<S>,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let validator = TokenValidator::from_ref(state);
        let identity = validate(parts, &validator);
        async move { Ok(Self(identity)) }
    }
}

/// Error returned by [`require_owner_access`] on an ownership mismatch.
#[derive(Debug, thiserror::Error)]
#[error("access denied: resource belongs to another user")]
pub struct OwnershipMismatch;

/// Enforce owner-only access: the acting user must match the resource owner.
///
/// Call before any mutating operation on an owned resource.
pub fn require_owner_access(
    resource_owner_id: &str,
    acting_user_id: &str,
) -> Result<(), OwnershipMismatch> {
    if resource_owner_id == acting_user_id {
        Ok(())
    } else {
        Err(OwnershipMismatch)
    }
}
