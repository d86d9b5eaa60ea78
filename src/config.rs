//! Client configuration
//!
//! A [`ClientConfig`] can be built in code, read from a YAML file, or read from
//! environment variables / a `KEY=VALUE` credentials file using the
//! `SECURITY_AND_COMPLIANCE_CENTER_` prefix:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `SECURITY_AND_COMPLIANCE_CENTER_URL` | service URL |
//! | `SECURITY_AND_COMPLIANCE_CENTER_INSTANCE_ID` | service instance (required) |
//! | `SECURITY_AND_COMPLIANCE_CENTER_AUTH_TYPE` | `none`, `bearer` or `basic` |
//! | `SECURITY_AND_COMPLIANCE_CENTER_BEARER_TOKEN` | token for `bearer` |
//! | `SECURITY_AND_COMPLIANCE_CENTER_USERNAME` / `_PASSWORD` | credentials for `basic` |
//! | `SECURITY_AND_COMPLIANCE_CENTER_TIMEOUT` | request timeout in seconds |

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default regional endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://us-south.compliance.cloud.ibm.com";

/// Prefix of every environment variable the client reads
pub const ENV_PREFIX: &str = "SECURITY_AND_COMPLIANCE_CENTER";

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

// ============================================================================
// Client Config
// ============================================================================

/// Everything needed to talk to one service instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Regional service URL, without the `/instances/...` suffix
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Service instance GUID
    pub instance_id: String,

    /// Credentials
    #[serde(default)]
    pub auth: AuthConfig,

    /// Transport settings
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

/// Transport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Client-side rate limit; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers sent with every request, e.g. `X-Correlation-ID`
    #[serde(default)]
    pub headers: StringMap,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[allow(clippy::unnecessary_wraps)]
fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            rate_limit: default_rate_limit(),
            user_agent: None,
            headers: StringMap::new(),
        }
    }
}

impl ClientConfig {
    /// Config for `instance_id` at the default service URL, without credentials
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            service_url: default_service_url(),
            instance_id: instance_id.into(),
            auth: AuthConfig::None,
            http: HttpSettings::default(),
        }
    }

    /// Set the service URL
    #[must_use]
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Set the credentials
    #[must_use]
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout_seconds = timeout.as_secs().max(1);
        self
    }

    /// Disable client-side rate limiting
    #[must_use]
    pub fn without_rate_limit(mut self) -> Self {
        self.http.rate_limit = None;
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.headers.insert(key.into(), value.into());
        self
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Read `SECURITY_AND_COMPLIANCE_CENTER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(ENV_PREFIX, |key| std::env::var(key).ok())
    }

    /// Read the same keys as [`from_env`](Self::from_env) from a credentials file
    ///
    /// The file uses dotenv syntax: `export` prefixes, single or double
    /// quotes and trailing `#` comments are understood. The process
    /// environment is left untouched.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let env_error =
            |e: dotenvy::Error| Error::config(format!("{}: {e}", path.display()));

        let vars = dotenvy::from_path_iter(path)
            .map_err(env_error)?
            .collect::<std::result::Result<StringMap, _>>()
            .map_err(env_error)?;

        Self::from_lookup(ENV_PREFIX, |key| vars.get(key).cloned())
    }

    /// Build a config from any key lookup, with keys named `{prefix}_{NAME}`
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            let key = format!("{prefix}_{name}");
            lookup(key.as_str()).filter(|value| !value.trim().is_empty())
        };
        let require = |name: &str| get(name).ok_or_else(|| Error::missing_field(format!("{prefix}_{name}")));

        let instance_id = require("INSTANCE_ID")?;
        let service_url = get("URL").unwrap_or_else(default_service_url);

        let auth_type = get("AUTH_TYPE").map(|t| t.to_lowercase());
        let auth = match auth_type.as_deref() {
            Some("bearer" | "bearertoken") => AuthConfig::bearer(require("BEARER_TOKEN")?),
            Some("basic") => AuthConfig::basic(require("USERNAME")?, require("PASSWORD")?),
            Some("none" | "noauth") => AuthConfig::None,
            Some(other) => {
                return Err(Error::invalid_value(
                    format!("{prefix}_AUTH_TYPE"),
                    format!("unsupported auth type '{other}'"),
                ))
            }
            None => get("BEARER_TOKEN").map_or(AuthConfig::None, AuthConfig::bearer),
        };

        let mut http = HttpSettings::default();
        if let Some(timeout) = get("TIMEOUT") {
            http.timeout_seconds = timeout.trim().parse().map_err(|_| {
                Error::invalid_value(format!("{prefix}_TIMEOUT"), "expected whole seconds")
            })?;
        }

        let config = Self {
            service_url,
            instance_id,
            auth,
            http,
        };
        config.validate()?;
        Ok(config)
    }

    // ------------------------------------------------------------------------
    // Validation & derived values
    // ------------------------------------------------------------------------

    /// Check the config before any request is made
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.service_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "service_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.instance_id.trim().is_empty() {
            return Err(Error::missing_field("instance_id"));
        }

        if self.http.timeout_seconds == 0 {
            return Err(Error::invalid_value("timeout_seconds", "must be greater than zero"));
        }

        Authenticator::new(self.auth.clone()).validate()
    }

    /// Root of every API path: `{service_url}/instances/{instance_id}/v3`
    pub fn base_url(&self) -> String {
        format!(
            "{}/instances/{}/v3",
            self.service_url.trim_end_matches('/'),
            self.instance_id.trim()
        )
    }

    /// Transport config derived from this client config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url())
            .timeout(Duration::from_secs(self.http.timeout_seconds));

        builder = match &self.http.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        for (key, value) in &self.http.headers {
            builder = builder.header(key.clone(), value.clone());
        }

        builder.build()
    }
}
