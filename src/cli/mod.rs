//! CLI module
//!
//! Command-line interface over [`ComplianceClient`](crate::service::ComplianceClient).
//!
//! # Commands
//!
//! - `check` - Test connection and credentials
//! - `list` - Page through a collection, one record per line
//! - `get` - Fetch a single resource
//! - `scan` - Start an on-demand scan
//!
//! Configuration comes from `--config` (YAML), `--env-file`, or the
//! `SECURITY_AND_COMPLIANCE_CENTER_*` environment variables, in that order.

mod commands;
mod runner;

pub use commands::{Cli, Commands, GetResource, ListArgs, ListResource, OutputFormat};
pub use runner::Runner;
