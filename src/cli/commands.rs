//! CLI commands and argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Security and Compliance Center client
#[derive(Parser, Debug)]
#[command(name = "scc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Credentials file with SECURITY_AND_COMPLIANCE_CENTER_* entries
    #[arg(long, global = true, conflicts_with = "config")]
    pub env_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test connection and credentials
    Check,

    /// List a paginated collection
    List(ListArgs),

    /// Fetch a single resource
    Get {
        /// Kind of resource
        resource: GetResource,

        /// Resource id (not needed for latest-reports)
        id: Option<String>,

        /// Parent profile id (profile-attachment only)
        #[arg(long)]
        parent: Option<String>,

        /// Sort order (latest-reports only)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Start an on-demand scan of an attachment
    Scan {
        /// Attachment to scan
        attachment_id: String,
    },
}

/// Arguments of `scc list`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Collection to list
    pub resource: ListResource,

    /// Parent id: profile for profile-attachments, scope for subscopes,
    /// report for report-evaluations and report-resources
    #[arg(long)]
    pub parent: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,

    /// Stop after this many pages
    #[arg(long)]
    pub max_pages: Option<u64>,

    /// Sort field
    #[arg(long)]
    pub sort: Option<String>,

    /// Type filter (control libraries, profiles, rules, reports)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Status filter (report evaluations and resources)
    #[arg(long)]
    pub status: Option<String>,

    /// Profile filter (attachments, reports)
    #[arg(long)]
    pub profile_id: Option<String>,

    /// Attachment filter (reports)
    #[arg(long)]
    pub attachment_id: Option<String>,
}

/// Paginated collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListResource {
    ControlLibraries,
    Profiles,
    ProfileAttachments,
    Attachments,
    Scopes,
    Subscopes,
    Targets,
    Rules,
    #[default]
    Reports,
    ReportEvaluations,
    ReportResources,
}

/// Single resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GetResource {
    ControlLibrary,
    Profile,
    ProfileAttachment,
    Scope,
    Target,
    Rule,
    Report,
    ReportSummary,
    ReportControls,
    LatestReports,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
