//! Auth configuration types

use serde::{Deserialize, Serialize};

/// Authentication configuration
///
/// Deserializes from the `auth` section of a client config file:
///
/// ```yaml
/// auth:
///   type: bearer
///   token: eyJraWQiOi...
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication (local testing, mock servers)
    #[default]
    #[serde(alias = "noauth")]
    None,

    /// Static bearer token sent as `Authorization: Bearer <token>`
    #[serde(alias = "bearertoken")]
    Bearer {
        /// The bearer token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl AuthConfig {
    /// Create a bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create a basic auth config
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Name of the auth scheme, as used in config files and env vars
    pub fn kind(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::Bearer { .. } => "bearer",
            AuthConfig::Basic { .. } => "basic",
        }
    }
}

// Credentials never end up in logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
        assert_eq!(config.kind(), "none");
    }

    #[test]
    fn test_auth_config_debug_redacts() {
        let debug = format!("{:?}", AuthConfig::bearer("super-secret"));
        assert!(!debug.contains("super-secret"));

        let debug = format!("{:?}", AuthConfig::basic("alice", "hunter2"));
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_auth_config_from_yaml() {
        let config: AuthConfig = serde_yaml::from_str("type: bearer\ntoken: abc\n").unwrap();
        assert_eq!(config, AuthConfig::bearer("abc"));

        let config: AuthConfig = serde_yaml::from_str("type: noauth\n").unwrap();
        assert_eq!(config, AuthConfig::None);
    }
}
