//! Test utilities for Brewlog services.
//!
//! Provides bearer-token minting so integration tests can exercise the auth
//! extractors without a real identity provider. Import in `#[cfg(test)]`
//! blocks and `tests/` only — never in production code.

pub mod auth;

pub use auth::{MockAuth, TEST_SECRET};
