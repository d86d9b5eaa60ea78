//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use super::types::AuthConfig;
use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The auth configuration in use
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Check that the credentials are usable before any request is made
    pub fn validate(&self) -> Result<()> {
        match &self.config {
            AuthConfig::None => Ok(()),
            AuthConfig::Bearer { token } if token.trim().is_empty() => {
                Err(Error::auth("bearer token is empty"))
            }
            AuthConfig::Bearer { .. } => Ok(()),
            AuthConfig::Basic { username, .. } if username.is_empty() => {
                Err(Error::auth("basic auth username is empty"))
            }
            AuthConfig::Basic { password, .. } if password.is_empty() => {
                Err(Error::auth("basic auth password is empty"))
            }
            AuthConfig::Basic { .. } => Ok(()),
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        self.validate()?;
        match &self.config {
            AuthConfig::None => Ok(req),
            AuthConfig::Bearer { token } => Ok(req.bearer_auth(token.trim())),
            AuthConfig::Basic { username, password } => {
                Ok(req.basic_auth(username, Some(password)))
            }
        }
    }
}
