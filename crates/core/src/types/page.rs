//! The paginated response envelope.

use serde::{Deserialize, Serialize};

/// One page of results plus the pagination metadata the remote service
/// reports alongside it.
///
/// `from` and `to` are 1-based inclusive display bounds; both are absent (or
/// zero) when the result set is empty. When `total > 0` the remote service
/// guarantees `0 <= (to - from + 1) <= per_page`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub to: Option<u32>,
}

impl<T> Paginated<T> {
    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
