//! Service client
//!
//! [`ComplianceClient`] exposes every operation of one service instance:
//! paginated listings return a [`Pager`](crate::pagination::Pager), single
//! resource calls return an [`ApiResponse`](crate::http::ApiResponse).
//!
//! ```rust,ignore
//! let config = ClientConfig::from_env()?;
//! let client = ComplianceClient::new(&config)?;
//!
//! let reports = client
//!     .list_reports(&ListReportsOptions::new().with_limit(50))?
//!     .get_all()
//!     .await?;
//! ```

mod client;

pub use client::{
    AttachmentsPager, ComplianceClient, ControlLibrariesPager, EvaluationsPager, ProfilesPager,
    ReportsPager, ResourcesPager, RulesPager, ScopesPager, TargetsPager,
};

#[cfg(test)]
mod tests;
