//! Cross-cutting library for Brewlog services: the audited query layer,
//! configuration loading, tracing setup, and shared middleware.

pub mod audited;
pub mod config;
pub mod middleware;
pub mod serde;
pub mod tracing;
