//! Bearer-token access control for Brewlog services.
//!
//! [`TokenValidator`] wraps JWT verification behind an opaque interface;
//! [`extract::Identity`] and [`extract::MaybeIdentity`] are the axum
//! extractors for required and optional auth routes.

pub mod extract;
pub mod token;

pub use extract::{Identity, MaybeIdentity, require_owner_access};
pub use token::{AuthError, TokenValidator};
