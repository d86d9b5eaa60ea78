//! Resource models
//!
//! Typed records for the resources the service manages. Each model names the
//! fields callers commonly need and keeps everything else in `extra`, so a
//! record read from the service serializes back without losing fields.
//!
//! The same types are used as request bodies when creating resources; unset
//! optional fields are omitted from the JSON.

mod catalog;
mod deployment;
mod report;

pub use catalog::{ControlLibrary, Profile, ProfileControl, Rule};
pub use deployment::{
    Attachment, AttachmentCollection, AttachmentScope, Scan, ScanRequest, Scope, ScopeProperty,
    Target,
};
pub use report::{
    ComplianceScore, Evaluation, LatestReports, Report, ReportControls, ReportSummary, Resource,
};

#[cfg(test)]
mod tests;
