//! Authentication module
//!
//! Supports: no auth, static bearer token, HTTP basic.
//!
//! Token acquisition (IAM API-key exchange and refresh) happens outside this
//! crate; callers hand over a ready-to-use bearer token.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
