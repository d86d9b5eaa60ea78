//! Options structs for list endpoints

use crate::error::{Error, Result};
use crate::types::{Environment, SortDirection, StringMap};
use serde::Serialize;
use serde_json::Value;

/// Common behaviour of list options
pub trait ListOptions: Serialize {
    /// Requested page size
    fn limit(&self) -> Option<u32>;

    /// Reject values the service would refuse
    fn validate(&self) -> Result<()> {
        if self.limit() == Some(0) {
            return Err(Error::invalid_value("limit", "must be greater than zero"));
        }
        Ok(())
    }

    /// Query parameters for every page request, excluding the cursor
    fn to_query(&self) -> Result<StringMap> {
        self.validate()?;

        let Value::Object(fields) = serde_json::to_value(self)? else {
            return Err(Error::config("list options must serialize to an object"));
        };

        let mut query = StringMap::new();
        for (key, value) in fields {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::invalid_value(key, "nested values are not query parameters"))
                }
            };
            query.insert(key, value);
        }
        Ok(query)
    }
}

/// Generates `with_*` setters for optional string filters plus `with_limit`
macro_rules! list_options {
    ($ty:ident { $($field:ident => $setter:ident),* $(,)? }) => {
        impl $ty {
            /// Set the page size
            #[must_use]
            pub fn with_limit(mut self, limit: u32) -> Self {
                self.limit = Some(limit);
                self
            }

            $(
                #[doc = concat!("Filter on `", stringify!($field), "`")]
                #[must_use]
                pub fn $setter(mut self, value: impl Into<String>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl ListOptions for $ty {
            fn limit(&self) -> Option<u32> {
                self.limit
            }
        }
    };
}

// ============================================================================
// Control Libraries & Profiles
// ============================================================================

/// Options for `GET /control_libraries`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListControlLibrariesOptions {
    /// Page size
    pub limit: Option<u32>,
    /// `predefined` or `custom`
    pub control_library_type: Option<String>,
}

impl ListControlLibrariesOptions {
    /// Options with no filters
    pub fn new() -> Self {
        Self::default()
    }
}

list_options!(ListControlLibrariesOptions {
    control_library_type => with_control_library_type,
});

/// Options for `GET /profiles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListProfilesOptions {
    /// Page size
    pub limit: Option<u32>,
    /// `predefined` or `custom`
    pub profile_type: Option<String>,
}

impl ListProfilesOptions {
    /// Options with no filters
    pub fn new() -> Self {
        Self::default()
    }
}

list_options!(ListProfilesOptions {
    profile_type => with_profile_type,
});

// ============================================================================
// Attachments
// ============================================================================

/// Options for `GET /profiles/{profile_id}/attachments`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListProfileAttachmentsOptions {
    /// Profile the attachments belong to (path parameter)
    #[serde(skip)]
    pub profile_id: String,
    /// Page size
    pub limit: Option<u32>,
}

impl ListProfileAttachmentsOptions {
    /// Options for the attachments of `profile_id`
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            ..Default::default()
        }
    }
}

list_options!(ListProfileAttachmentsOptions {});

/// Options for `GET /attachments` (every attachment of the instance)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAttachmentsOptions {
    /// Page size
    pub limit: Option<u32>,
    /// Only attachments of this profile
    pub profile_id: Option<String>,
    /// Field to sort on
    pub sort: Option<String>,
    /// Sort direction
    pub direction: Option<SortDirection>,
}

impl ListAttachmentsOptions {
    /// Options with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort direction
    #[must_use]
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }
}

list_options!(ListAttachmentsOptions {
    profile_id => with_profile_id,
    sort => with_sort,
});

// ============================================================================
// Scopes & Targets
// ============================================================================

/// Options for `GET /scopes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListScopesOptions {
    /// Page size
    pub limit: Option<u32>,
    /// Scope name
    pub name: Option<String>,
    /// Scope description
    pub description: Option<String>,
    /// Scope environment
    pub environment: Option<Environment>,
}

impl ListScopesOptions {
    /// Options with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on the environment the scope lives in
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }
}

list_options!(ListScopesOptions {
    name => with_name,
    description => with_description,
});

/// Options for `GET /scopes/{scope_id}/subscopes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListSubscopesOptions {
    /// Parent scope (path parameter)
    #[serde(skip)]
    pub scope_id: String,
    /// Page size
    pub limit: Option<u32>,
    /// Subscope name
    pub name: Option<String>,
    /// Subscope description
    pub description: Option<String>,
    /// Subscope environment
    pub environment: Option<Environment>,
}

impl ListSubscopesOptions {
    /// Options for the subscopes of `scope_id`
    pub fn new(scope_id: impl Into<String>) -> Self {
        Self {
            scope_id: scope_id.into(),
            ..Default::default()
        }
    }

    /// Filter on the environment the subscope lives in
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }
}

list_options!(ListSubscopesOptions {
    name => with_name,
    description => with_description,
});

/// Options for `GET /targets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListTargetsOptions {
    /// Page size
    pub limit: Option<u32>,
}

impl ListTargetsOptions {
    /// Options with no filters
    pub fn new() -> Self {
        Self::default()
    }
}

list_options!(ListTargetsOptions {});

// ============================================================================
// Rules
// ============================================================================

/// Options for `GET /rules`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListRulesOptions {
    /// Page size
    pub limit: Option<u32>,
    /// `system_defined` or `user_defined`
    #[serde(rename = "type")]
    pub rule_type: Option<String>,
    /// Free-text search on rule description
    pub search: Option<String>,
    /// Service the rule targets
    pub service_name: Option<String>,
    /// Field to sort on
    pub sort: Option<String>,
}

impl ListRulesOptions {
    /// Options with no filters
    pub fn new() -> Self {
        Self::default()
    }
}

list_options!(ListRulesOptions {
    rule_type => with_rule_type,
    search => with_search,
    service_name => with_service_name,
    sort => with_sort,
});

// ============================================================================
// Reports
// ============================================================================

/// Options for `GET /reports`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListReportsOptions {
    /// Page size
    pub limit: Option<u32>,
    /// Attachment that produced the report
    pub attachment_id: Option<String>,
    /// Report group
    pub group_id: Option<String>,
    /// Profile evaluated
    pub profile_id: Option<String>,
    /// Scope evaluated
    pub scope_id: Option<String>,
    /// Subscope evaluated
    pub subscope_id: Option<String>,
    /// `scheduled` or `ondemand`
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    /// Field to sort on
    pub sort: Option<String>,
}

impl ListReportsOptions {
    /// Options with no filters
    pub fn new() -> Self {
        Self::default()
    }
}

list_options!(ListReportsOptions {
    attachment_id => with_attachment_id,
    group_id => with_group_id,
    profile_id => with_profile_id,
    scope_id => with_scope_id,
    subscope_id => with_subscope_id,
    report_type => with_report_type,
    sort => with_sort,
});

/// Options for `GET /reports/{report_id}/evaluations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListReportEvaluationsOptions {
    /// Report (path parameter)
    #[serde(skip)]
    pub report_id: String,
    /// Page size
    pub limit: Option<u32>,
    /// Assessment
    pub assessment_id: Option<String>,
    /// Component, e.g. `cloud-object-storage`
    pub component_id: Option<String>,
    /// Evaluated target
    pub target_id: Option<String>,
    /// Evaluated target name
    pub target_name: Option<String>,
    /// `pass`, `failure`, `error` or `skipped`
    pub status: Option<String>,
    /// Field to sort on
    pub sort: Option<String>,
}

impl ListReportEvaluationsOptions {
    /// Options for the evaluations of `report_id`
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }
}

list_options!(ListReportEvaluationsOptions {
    assessment_id => with_assessment_id,
    component_id => with_component_id,
    target_id => with_target_id,
    target_name => with_target_name,
    status => with_status,
    sort => with_sort,
});

/// Options for `GET /reports/{report_id}/resources`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListReportResourcesOptions {
    /// Report (path parameter)
    #[serde(skip)]
    pub report_id: String,
    /// Page size
    pub limit: Option<u32>,
    /// Resource CRN
    pub id: Option<String>,
    /// Resource name
    pub resource_name: Option<String>,
    /// Account owning the resource
    pub account_id: Option<String>,
    /// Component, e.g. `cloud-object-storage`
    pub component_id: Option<String>,
    /// `compliant`, `not_compliant`, `unable_to_perform` or `user_evaluation_required`
    pub status: Option<String>,
    /// Field to sort on
    pub sort: Option<String>,
}

impl ListReportResourcesOptions {
    /// Options for the resources of `report_id`
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }
}

list_options!(ListReportResourcesOptions {
    id => with_id,
    resource_name => with_resource_name,
    account_id => with_account_id,
    component_id => with_component_id,
    status => with_status,
    sort => with_sort,
});
