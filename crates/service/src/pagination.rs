//! Pagination utilities for service layer
//!
//! Offset/limit pagination with helpers to normalize inputs.

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;
/// OFFSET is bound as a Postgres BIGINT.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip
    pub skip: u64,
    /// maximum rows returned
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip: skip.unwrap_or(0), limit: limit.unwrap_or(DEFAULT_LIMIT) }
    }

    /// Clamp the limit into `1..=MAX_LIMIT` and the offset to `MAX_SKIP`;
    /// returns `(offset, limit)`.
    pub fn normalize(self) -> (u64, u64) {
        (self.skip.min(MAX_SKIP), self.limit.clamp(1, MAX_LIMIT))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}
