//! Shared domain primitives for Brewlog services.

pub mod pagination;
pub mod patch;
