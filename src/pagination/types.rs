//! Pagination types and traits
//!
//! Defines the core pagination abstractions shared by every list endpoint.

use crate::error::Result;
use async_trait::async_trait;

/// One bounded batch of list results plus the cursor for the next batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in service order
    pub items: Vec<T>,
    /// Continuation token; `None` means this is the last page
    pub next: Option<String>,
    /// Total number of matching items, when the service reports it
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Create a page; an empty cursor is treated as no cursor
    pub fn new(items: Vec<T>, next: Option<String>) -> Self {
        Self {
            items,
            next: next.filter(|cursor| !cursor.is_empty()),
            total_count: None,
        }
    }

    /// Create the final page of a listing
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Check if no page follows this one
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Where a pager is in its iteration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PagerState {
    /// Nothing fetched yet; the next fetch requests the first page
    #[default]
    Fresh,
    /// At least one page fetched and the service returned a cursor
    Active {
        /// Cursor to send with the next request
        cursor: String,
    },
    /// The last page has been fetched. Terminal.
    Exhausted,
}

impl PagerState {
    /// Cursor to send with the next request (`None` for the first page)
    pub fn cursor(&self) -> Option<&str> {
        match self {
            PagerState::Active { cursor } => Some(cursor),
            PagerState::Fresh | PagerState::Exhausted => None,
        }
    }

    /// Check if iteration has finished
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PagerState::Exhausted)
    }

    /// State after a successful fetch that returned `next`
    pub(crate) fn advance(next: Option<String>) -> Self {
        match next {
            Some(cursor) if !cursor.is_empty() => PagerState::Active { cursor },
            _ => PagerState::Exhausted,
        }
    }
}

/// Fetches a single page of a listing
///
/// Implementations perform exactly one request per call and keep no state
/// between calls. Filters and page size are fixed when the fetcher is built.
/// Failures are returned as-is; retrying is not the fetcher's job.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Item type of the listing
    type Item: Send;

    /// Fetch the page starting at `start`, or the first page when `None`
    async fn fetch_page(&self, start: Option<&str>) -> Result<Page<Self::Item>>;
}
