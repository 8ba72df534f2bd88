//! Cursor pagination for index scans.

use serde::{Deserialize, Serialize};

/// Largest page a backend will hand out in one call.
///
/// Requests above this are clamped; callers that need more rows page through
/// with the returned cursor.
pub const MAX_PAGE_ROWS: usize = 8192;

/// Opaque position inside an index scan.
///
/// Only the backend that produced a cursor can interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a backend-specific token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A request for one page of an index scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Where to resume; `None` starts at the beginning of the index.
    pub cursor: Option<Cursor>,
    /// Maximum rows to return.
    pub limit: usize,
}

impl PageRequest {
    /// The first `limit` rows of the index.
    pub fn first(limit: usize) -> Self {
        Self {
            cursor: None,
            limit,
        }
    }

    /// The next `limit` rows after `cursor`.
    pub fn after(cursor: Cursor, limit: usize) -> Self {
        Self {
            cursor: Some(cursor),
            limit,
        }
    }

    /// The effective limit after backend clamping.
    pub fn clamped_limit(&self) -> usize {
        self.limit.min(MAX_PAGE_ROWS)
    }
}

/// One page of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows in index order.
    pub items: Vec<T>,
    /// Set iff more rows remain after this page.
    pub next: Option<Cursor>,
}

impl<T> Page<T> {
    /// A page with nothing after it.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// An empty, final page.
    pub fn empty() -> Self {
        Self::last(Vec::new())
    }

    /// Whether more rows remain.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}
