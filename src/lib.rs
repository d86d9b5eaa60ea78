// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # SCC Client
//!
//! Async Rust client for the Security and Compliance Center v3 REST API.
//!
//! ## Features
//!
//! - **Typed Pagination**: one generic [`Pager`] drives every list endpoint
//! - **Typed Options**: one options struct per list endpoint
//! - **Bearer/Basic Auth**: credentials applied to every request
//! - **Client-side Rate Limiting**: optional token bucket per client
//! - **Config Loading**: YAML, environment variables or a credentials file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scc_client::{ClientConfig, ComplianceClient, ListReportsOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = ComplianceClient::new(&config)?;
//!
//!     let mut pager = client.list_reports(&ListReportsOptions::new().with_limit(50))?;
//!     while pager.has_next() {
//!         for report in pager.get_next().await? {
//!             println!("{:?}", report.id);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ComplianceClient                        │
//! │  list_*(options) → Pager     get_* / create_* → ApiResponse │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬─────────────────┴──┬──────────────┬────────────┐
//! │  Options  │      Pager         │   Decode     │   HTTP     │
//! ├───────────┼────────────────────┼──────────────┼────────────┤
//! │ limit     │ has_next           │ items field  │ Auth       │
//! │ filters   │ get_next / get_all │ next.start   │ Rate Limit │
//! │ path ids  │ into_stream        │ total_count  │ Status map │
//! └───────────┴────────────────────┴──────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP transport with rate limiting
pub mod http;

/// List response decoding
pub mod decode;

/// Cursor-based pagination
pub mod pagination;

/// Options for list endpoints
pub mod options;

/// Resource models
pub mod models;

/// Client configuration
pub mod config;

/// Service operations
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ClientConfig;
pub use http::ApiResponse;
pub use options::*;
pub use pagination::{Page, PageFetcher, Pager, PagerState};
pub use service::ComplianceClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
