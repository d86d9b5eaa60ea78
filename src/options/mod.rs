//! List options
//!
//! One explicit options struct per paginated endpoint. Options are fixed when
//! a pager is created and never change while it iterates.
//!
//! Filters serialize to query parameters through [`ListOptions::to_query`];
//! identifiers that belong in the URL path are never sent as query parameters.

mod types;

pub use types::{
    ListAttachmentsOptions, ListControlLibrariesOptions, ListOptions,
    ListProfileAttachmentsOptions, ListProfilesOptions, ListReportEvaluationsOptions,
    ListReportResourcesOptions, ListReportsOptions, ListRulesOptions, ListScopesOptions,
    ListSubscopesOptions, ListTargetsOptions,
};
