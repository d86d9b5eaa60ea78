//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, GetResource, ListArgs, ListResource, OutputFormat};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::options::{
    ListAttachmentsOptions, ListControlLibrariesOptions, ListProfileAttachmentsOptions,
    ListProfilesOptions, ListReportEvaluationsOptions, ListReportResourcesOptions,
    ListReportsOptions, ListRulesOptions, ListScopesOptions, ListSubscopesOptions,
    ListTargetsOptions,
};
use crate::pagination::{PageFetcher, Pager};
use crate::service::ComplianceClient;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = ComplianceClient::new(&config)?;

        match &self.cli.command {
            Commands::Check => self.check(&client, &config.instance_id).await,
            Commands::List(args) => self.list(&client, args).await,
            Commands::Get {
                resource,
                id,
                parent,
                sort,
            } => {
                self.get(
                    &client,
                    *resource,
                    id.as_deref().unwrap_or_default(),
                    parent.as_deref().unwrap_or_default(),
                    sort.as_deref(),
                )
                .await
            }
            Commands::Scan { attachment_id } => self.scan(&client, attachment_id).await,
        }
    }

    /// Load client config from `--config`, `--env-file` or the environment
    fn load_config(&self) -> Result<ClientConfig> {
        if let Some(path) = &self.cli.config {
            return ClientConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()));
        }

        if let Some(path) = &self.cli.env_file {
            return ClientConfig::from_env_file(path)
                .with_context(|| format!("Failed to load credentials {}", path.display()));
        }

        ClientConfig::from_env().context("Failed to read config from environment")
    }

    /// Check connection by reading the first page of profiles
    async fn check(&self, client: &ComplianceClient, instance_id: &str) -> Result<()> {
        let mut pager = client.list_profiles(&ListProfilesOptions::new().with_limit(1))?;
        pager.get_next().await.context("Connection check failed")?;

        info!("Connected to instance {}", instance_id);
        self.output(&json!({
            "status": "ok",
            "instance_id": instance_id,
            "profiles": pager.total_count(),
        }))
    }

    /// Page through a collection, emitting every record
    async fn list(&self, client: &ComplianceClient, args: &ListArgs) -> Result<()> {
        let parent = args.parent.clone().unwrap_or_default();
        let sort = args.sort.clone();
        let max_pages = args.max_pages;

        match args.resource {
            ListResource::ControlLibraries => {
                let mut options = ListControlLibrariesOptions::new();
                options.limit = args.limit;
                options.control_library_type = args.kind.clone();
                self.drain(client.list_control_libraries(&options)?, max_pages)
                    .await
            }
            ListResource::Profiles => {
                let mut options = ListProfilesOptions::new();
                options.limit = args.limit;
                options.profile_type = args.kind.clone();
                self.drain(client.list_profiles(&options)?, max_pages).await
            }
            ListResource::ProfileAttachments => {
                let mut options = ListProfileAttachmentsOptions::new(parent);
                options.limit = args.limit;
                self.drain(client.list_profile_attachments(&options)?, max_pages)
                    .await
            }
            ListResource::Attachments => {
                let mut options = ListAttachmentsOptions::new();
                options.limit = args.limit;
                options.profile_id = args.profile_id.clone();
                options.sort = sort;
                self.drain(client.list_attachments(&options)?, max_pages)
                    .await
            }
            ListResource::Scopes => {
                let mut options = ListScopesOptions::new();
                options.limit = args.limit;
                self.drain(client.list_scopes(&options)?, max_pages).await
            }
            ListResource::Subscopes => {
                let mut options = ListSubscopesOptions::new(parent);
                options.limit = args.limit;
                self.drain(client.list_subscopes(&options)?, max_pages).await
            }
            ListResource::Targets => {
                let mut options = ListTargetsOptions::new();
                options.limit = args.limit;
                self.drain(client.list_targets(&options)?, max_pages).await
            }
            ListResource::Rules => {
                let mut options = ListRulesOptions::new();
                options.limit = args.limit;
                options.rule_type = args.kind.clone();
                options.sort = sort;
                self.drain(client.list_rules(&options)?, max_pages).await
            }
            ListResource::Reports => {
                let mut options = ListReportsOptions::new();
                options.limit = args.limit;
                options.report_type = args.kind.clone();
                options.profile_id = args.profile_id.clone();
                options.attachment_id = args.attachment_id.clone();
                options.sort = sort;
                self.drain(client.list_reports(&options)?, max_pages).await
            }
            ListResource::ReportEvaluations => {
                let mut options = ListReportEvaluationsOptions::new(parent);
                options.limit = args.limit;
                options.status = args.status.clone();
                options.sort = sort;
                self.drain(client.list_report_evaluations(&options)?, max_pages)
                    .await
            }
            ListResource::ReportResources => {
                let mut options = ListReportResourcesOptions::new(parent);
                options.limit = args.limit;
                options.status = args.status.clone();
                options.sort = sort;
                self.drain(client.list_report_resources(&options)?, max_pages)
                    .await
            }
        }
    }

    /// Emit every item of `pager`, stopping early after `max_pages`
    async fn drain<F>(&self, mut pager: Pager<F>, max_pages: Option<u64>) -> Result<()>
    where
        F: PageFetcher,
        F::Item: Serialize,
    {
        let mut emitted = 0u64;

        while pager.has_next() {
            if max_pages.is_some_and(|max| pager.pages_fetched() >= max) {
                debug!("Stopping after {} pages", pager.pages_fetched());
                break;
            }

            for item in pager.get_next().await? {
                self.output(&item)?;
                emitted += 1;
            }
        }

        info!(
            "Listed {} records in {} pages{}",
            emitted,
            pager.pages_fetched(),
            pager
                .total_count()
                .map(|total| format!(" (total {total})"))
                .unwrap_or_default()
        );
        Ok(())
    }

    /// Fetch one resource
    async fn get(
        &self,
        client: &ComplianceClient,
        resource: GetResource,
        id: &str,
        parent: &str,
        sort: Option<&str>,
    ) -> Result<()> {
        match resource {
            GetResource::ControlLibrary => {
                self.output(&client.get_control_library(id).await?.result)
            }
            GetResource::Profile => self.output(&client.get_profile(id).await?.result),
            GetResource::ProfileAttachment => {
                self.output(&client.get_profile_attachment(parent, id).await?.result)
            }
            GetResource::Scope => self.output(&client.get_scope(id).await?.result),
            GetResource::Target => self.output(&client.get_target(id).await?.result),
            GetResource::Rule => self.output(&client.get_rule(id).await?.result),
            GetResource::Report => self.output(&client.get_report(id).await?.result),
            GetResource::ReportSummary => {
                self.output(&client.get_report_summary(id).await?.result)
            }
            GetResource::ReportControls => {
                self.output(&client.get_report_controls(id).await?.result)
            }
            GetResource::LatestReports => {
                self.output(&client.get_latest_reports(sort).await?.result)
            }
        }
    }

    /// Start a scan
    async fn scan(&self, client: &ComplianceClient, attachment_id: &str) -> Result<()> {
        let response = client.create_scan(attachment_id).await?;
        debug!("Scan request returned {}", response.status_code());
        self.output(&response.result)
    }

    /// Write one value to stdout in the selected format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").map_err(Error::Io)
    }
}
