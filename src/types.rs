//! Common types used throughout the SCC client
//!
//! Shared type aliases and small enums used by more than one module.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Sort Direction
// ============================================================================

/// Sort direction accepted by list endpoints that support ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

// ============================================================================
// Scope Environment
// ============================================================================

/// Environment a scope or subscope lives in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    /// IBM Cloud account resources
    IbmCloud,
    /// Amazon Web Services
    Aws,
    /// Microsoft Azure
    Azure,
    /// Any environment not known to this client
    #[serde(other)]
    Other,
}

impl Environment {
    /// Wire value for this environment
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::IbmCloud => "ibm-cloud",
            Environment::Aws => "aws",
            Environment::Azure => "azure",
            Environment::Other => "other",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_wire_values() {
        let env: Environment = serde_json::from_str("\"ibm-cloud\"").unwrap();
        assert_eq!(env, Environment::IbmCloud);
        assert_eq!(env.to_string(), "ibm-cloud");

        let env: Environment = serde_json::from_str("\"gcp\"").unwrap();
        assert_eq!(env, Environment::Other);
    }

    #[test]
    fn test_sort_direction_default() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!(
            serde_json::to_string(&SortDirection::Desc).unwrap(),
            "\"desc\""
        );
    }
}
