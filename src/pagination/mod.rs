//! Pagination module
//!
//! Cursor-based page iteration over the service's list endpoints.
//!
//! # Overview
//!
//! - [`PageFetcher`] issues exactly one list request for a given cursor.
//! - [`Pager`] wraps a fetcher and tracks the cursor until the service stops
//!   returning one. It is written once and reused by every list endpoint.
//! - [`CollectionFetcher`] is the HTTP implementation used by
//!   [`ComplianceClient`](crate::service::ComplianceClient).
//!
//! ```rust,ignore
//! let mut pager = client.list_reports(ListReportsOptions::new().with_limit(50))?;
//! while pager.has_next() {
//!     for report in pager.get_next().await? {
//!         println!("{}", report.id);
//!     }
//! }
//! ```

mod fetcher;
mod pager;
mod types;

pub use fetcher::CollectionFetcher;
pub use pager::Pager;
pub use types::{Page, PageFetcher, PagerState};

#[cfg(test)]
mod tests;
