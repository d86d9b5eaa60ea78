//! Compliance reports and their drill-down records

use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one scan of one attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// `scheduled` or `ondemand`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cos_object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Report {
    /// Id of the attachment that produced this report, when embedded
    pub fn attachment_id(&self) -> Option<&str> {
        self.attachment.as_ref()?.get("id")?.as_str()
    }

    /// Id of the evaluated profile, when embedded
    pub fn profile_id(&self) -> Option<&str> {
        self.profile.as_ref()?.get("id")?.as_str()
    }
}

/// Pass/total tallies with a percentage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScore {
    #[serde(default)]
    pub passed: u64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub percent: f64,
}

/// `GET /reports/{id}/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    // Misspelled on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isntance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ComplianceScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// `GET /reports/{id}/controls`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportControls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub controls: Vec<JsonValue>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// `GET /reports/latest`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestReports {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ComplianceScore>,
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Outcome of one assessment against one target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    /// `pass`, `failure`, `error` or `skipped`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Compliance state of one resource within a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_count: Option<u64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}
