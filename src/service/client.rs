//! Compliance service client

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{ApiResponse, HttpClient, RequestConfig};
use crate::models::{
    Attachment, AttachmentCollection, ControlLibrary, Evaluation, LatestReports, Profile, Report,
    ReportControls, ReportSummary, Resource, Rule, Scan, ScanRequest, Scope, Target,
};
use crate::options::{
    ListAttachmentsOptions, ListControlLibrariesOptions, ListOptions,
    ListProfileAttachmentsOptions, ListProfilesOptions, ListReportEvaluationsOptions,
    ListReportResourcesOptions, ListReportsOptions, ListRulesOptions, ListScopesOptions,
    ListSubscopesOptions, ListTargetsOptions,
};
use crate::pagination::{CollectionFetcher, Pager};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

pub type ControlLibrariesPager = Pager<CollectionFetcher<ControlLibrary>>;
pub type ProfilesPager = Pager<CollectionFetcher<Profile>>;
pub type AttachmentsPager = Pager<CollectionFetcher<Attachment>>;
pub type ScopesPager = Pager<CollectionFetcher<Scope>>;
pub type TargetsPager = Pager<CollectionFetcher<Target>>;
pub type RulesPager = Pager<CollectionFetcher<Rule>>;
pub type ReportsPager = Pager<CollectionFetcher<Report>>;
pub type EvaluationsPager = Pager<CollectionFetcher<Evaluation>>;
pub type ResourcesPager = Pager<CollectionFetcher<Resource>>;

/// Client for one service instance
///
/// Cheap to clone; clones share the transport and its rate limiter. Every
/// pager created from the client shares them as well.
#[derive(Debug, Clone)]
pub struct ComplianceClient {
    http: Arc<HttpClient>,
}

impl ComplianceClient {
    /// Validate `config` and build a client for it
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = HttpClient::with_auth(config.http_client_config(), config.auth.clone())?;
        info!(
            instance_id = %config.instance_id,
            auth = config.auth.kind(),
            "Created compliance client for {}",
            config.service_url
        );

        Ok(Self::from_http(http))
    }

    /// Wrap an already configured transport whose base URL ends in `/v3`
    pub fn from_http(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========================================================================
    // Control Libraries
    // ========================================================================

    pub fn list_control_libraries(
        &self,
        options: &ListControlLibrariesOptions,
    ) -> Result<ControlLibrariesPager> {
        self.pager("/control_libraries".to_string(), "control_libraries", options)
    }

    pub async fn get_control_library(&self, id: &str) -> Result<ApiResponse<ControlLibrary>> {
        let id = require_id("control_library_id", id)?;
        self.get(&format!("/control_libraries/{id}")).await
    }

    /// Create a custom control library
    pub async fn create_control_library(
        &self,
        library: &ControlLibrary,
    ) -> Result<ApiResponse<ControlLibrary>> {
        self.create("/control_libraries", library).await
    }

    /// Delete a custom control library
    pub async fn delete_control_library(&self, id: &str) -> Result<ApiResponse<()>> {
        let id = require_id("control_library_id", id)?;
        self.delete(&format!("/control_libraries/{id}")).await
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    pub fn list_profiles(&self, options: &ListProfilesOptions) -> Result<ProfilesPager> {
        self.pager("/profiles".to_string(), "profiles", options)
    }

    pub async fn get_profile(&self, id: &str) -> Result<ApiResponse<Profile>> {
        let id = require_id("profile_id", id)?;
        self.get(&format!("/profiles/{id}")).await
    }

    /// Create a custom profile
    pub async fn create_profile(&self, profile: &Profile) -> Result<ApiResponse<Profile>> {
        self.create("/profiles", profile).await
    }

    /// Delete a custom profile
    pub async fn delete_profile(&self, id: &str) -> Result<ApiResponse<()>> {
        let id = require_id("profile_id", id)?;
        self.delete(&format!("/profiles/{id}")).await
    }

    // ========================================================================
    // Attachments
    // ========================================================================

    /// Attachments of one profile
    pub fn list_profile_attachments(
        &self,
        options: &ListProfileAttachmentsOptions,
    ) -> Result<AttachmentsPager> {
        let profile_id = require_id("profile_id", &options.profile_id)?;
        self.pager(
            format!("/profiles/{profile_id}/attachments"),
            "attachments",
            options,
        )
    }

    /// Attachments across every profile of the instance
    pub fn list_attachments(&self, options: &ListAttachmentsOptions) -> Result<AttachmentsPager> {
        self.pager("/attachments".to_string(), "attachments", options)
    }

    pub async fn get_profile_attachment(
        &self,
        profile_id: &str,
        attachment_id: &str,
    ) -> Result<ApiResponse<Attachment>> {
        let profile_id = require_id("profile_id", profile_id)?;
        let attachment_id = require_id("attachment_id", attachment_id)?;
        self.get(&format!("/profiles/{profile_id}/attachments/{attachment_id}"))
            .await
    }

    /// Attach a profile to one or more scopes
    pub async fn create_profile_attachment(
        &self,
        profile_id: &str,
        attachments: &AttachmentCollection,
    ) -> Result<ApiResponse<AttachmentCollection>> {
        let profile_id = require_id("profile_id", profile_id)?;
        self.create(&format!("/profiles/{profile_id}/attachments"), attachments)
            .await
    }

    pub async fn delete_profile_attachment(
        &self,
        profile_id: &str,
        attachment_id: &str,
    ) -> Result<ApiResponse<()>> {
        let profile_id = require_id("profile_id", profile_id)?;
        let attachment_id = require_id("attachment_id", attachment_id)?;
        self.delete(&format!("/profiles/{profile_id}/attachments/{attachment_id}"))
            .await
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    pub fn list_scopes(&self, options: &ListScopesOptions) -> Result<ScopesPager> {
        self.pager("/scopes".to_string(), "scopes", options)
    }

    pub fn list_subscopes(&self, options: &ListSubscopesOptions) -> Result<ScopesPager> {
        let scope_id = require_id("scope_id", &options.scope_id)?;
        self.pager(format!("/scopes/{scope_id}/subscopes"), "subscopes", options)
    }

    pub async fn get_scope(&self, id: &str) -> Result<ApiResponse<Scope>> {
        let id = require_id("scope_id", id)?;
        self.get(&format!("/scopes/{id}")).await
    }

    pub async fn create_scope(&self, scope: &Scope) -> Result<ApiResponse<Scope>> {
        self.create("/scopes", scope).await
    }

    pub async fn delete_scope(&self, id: &str) -> Result<ApiResponse<()>> {
        let id = require_id("scope_id", id)?;
        self.delete(&format!("/scopes/{id}")).await
    }

    // ========================================================================
    // Targets
    // ========================================================================

    pub fn list_targets(&self, options: &ListTargetsOptions) -> Result<TargetsPager> {
        self.pager("/targets".to_string(), "targets", options)
    }

    pub async fn get_target(&self, id: &str) -> Result<ApiResponse<Target>> {
        let id = require_id("target_id", id)?;
        self.get(&format!("/targets/{id}")).await
    }

    // ========================================================================
    // Rules
    // ========================================================================

    pub fn list_rules(&self, options: &ListRulesOptions) -> Result<RulesPager> {
        self.pager("/rules".to_string(), "rules", options)
    }

    pub async fn get_rule(&self, id: &str) -> Result<ApiResponse<Rule>> {
        let id = require_id("rule_id", id)?;
        self.get(&format!("/rules/{id}")).await
    }

    pub async fn create_rule(&self, rule: &Rule) -> Result<ApiResponse<Rule>> {
        self.create("/rules", rule).await
    }

    pub async fn delete_rule(&self, id: &str) -> Result<ApiResponse<()>> {
        let id = require_id("rule_id", id)?;
        self.delete(&format!("/rules/{id}")).await
    }

    // ========================================================================
    // Scans
    // ========================================================================

    /// Start an on-demand scan of an attachment
    pub async fn create_scan(&self, attachment_id: &str) -> Result<ApiResponse<Scan>> {
        let attachment_id = require_id("attachment_id", attachment_id)?;
        let request = ScanRequest {
            attachment_id: attachment_id.to_string(),
        };
        info!("Starting scan of attachment {}", attachment_id);
        self.create("/scans", &request).await
    }

    // ========================================================================
    // Reports
    // ========================================================================

    pub fn list_reports(&self, options: &ListReportsOptions) -> Result<ReportsPager> {
        self.pager("/reports".to_string(), "reports", options)
    }

    pub fn list_report_evaluations(
        &self,
        options: &ListReportEvaluationsOptions,
    ) -> Result<EvaluationsPager> {
        let report_id = require_id("report_id", &options.report_id)?;
        self.pager(
            format!("/reports/{report_id}/evaluations"),
            "evaluations",
            options,
        )
    }

    pub fn list_report_resources(
        &self,
        options: &ListReportResourcesOptions,
    ) -> Result<ResourcesPager> {
        let report_id = require_id("report_id", &options.report_id)?;
        self.pager(format!("/reports/{report_id}/resources"), "resources", options)
    }

    pub async fn get_report(&self, id: &str) -> Result<ApiResponse<Report>> {
        let id = require_id("report_id", id)?;
        self.get(&format!("/reports/{id}")).await
    }

    /// Most recent report of every attachment, optionally sorted
    pub async fn get_latest_reports(
        &self,
        sort: Option<&str>,
    ) -> Result<ApiResponse<LatestReports>> {
        let mut config = RequestConfig::new();
        if let Some(sort) = sort.filter(|s| !s.is_empty()) {
            config = config.query("sort", sort);
        }
        self.http
            .send_json(Method::GET, "/reports/latest", config)
            .await
    }

    pub async fn get_report_summary(&self, id: &str) -> Result<ApiResponse<ReportSummary>> {
        let id = require_id("report_id", id)?;
        self.get(&format!("/reports/{id}/summary")).await
    }

    pub async fn get_report_controls(&self, id: &str) -> Result<ApiResponse<ReportControls>> {
        let id = require_id("report_id", id)?;
        self.get(&format!("/reports/{id}/controls")).await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    /// Build a pager over `path`, fixing the query from `options`
    fn pager<T, O>(
        &self,
        path: String,
        items_field: &str,
        options: &O,
    ) -> Result<Pager<CollectionFetcher<T>>>
    where
        T: DeserializeOwned + Send + 'static,
        O: ListOptions,
    {
        let query = options.to_query()?;
        debug!("Paging {} ({} fixed query params)", path, query.len());

        let fetcher =
            CollectionFetcher::new(Arc::clone(&self.http), path, items_field).with_query(query);
        Ok(Pager::new(fetcher))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.http.send_json(Method::GET, path, RequestConfig::new()).await
    }

    async fn create<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.http
            .send_json(Method::POST, path, RequestConfig::new().json(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse<()>> {
        self.http
            .send_empty(Method::DELETE, path, RequestConfig::new())
            .await
    }
}

/// Reject blank path identifiers before any request is made
fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::missing_param(name));
    }
    Ok(value)
}
