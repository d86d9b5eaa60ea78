//! HTTP client module
//!
//! The transport every service call goes through.
//!
//! # Features
//!
//! - **Single attempt**: errors are classified, never retried internally
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Authentication**: Integration with auth module
//! - **Typed responses**: [`ApiResponse`] keeps status and headers next to the body

mod client;
mod rate_limit;

pub use client::{ApiResponse, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
