//! Offset/limit pagination shared across all list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination parameters shared across all list endpoints.
///
/// - `skip`: rows to skip, default 0
/// - `limit`: rows to return, 1–1000, default 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    /// Clamp `limit` to the valid range 1–1000.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            skip: self.skip,
            limit: self.limit.clamp(1, 1000),
        }
    }

    /// 1-based page number implied by the current offset, for list envelopes.
    pub fn page_number(&self) -> u64 {
        self.skip / self.limit.max(1) + 1
    }
}
