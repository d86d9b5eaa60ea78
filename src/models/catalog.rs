//! Control libraries, profiles and rules

use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A control library: a versioned set of controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibrary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_description: Option<String>,
    /// `predefined` or `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A profile: a selection of controls from one or more libraries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_description: Option<String>,
    /// `predefined` or `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<ProfileControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Reference from a profile to a control in a library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_name: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A rule: one machine-evaluable check against a resource type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `system_defined` or `user_defined`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_config: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: JsonObject,
}
