//! Client builder for constructing [`AdzerkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`AdzerkClient`] methods)
//! - Ad request construction (see
//!   [`RequestBuilder`](crate::models::request::RequestBuilder))
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - When no base URL is given, the production engine endpoint is used

use std::time::Duration;

use crate::client::{AdzerkClient, DEFAULT_ENDPOINT};
use crate::error::Result;

/// Default request timeout applied to the HTTP client.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for creating a new [`AdzerkClient`].
///
/// All options have defaults; `AdzerkClient::builder().build()` yields a
/// client pointed at the production engine.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use adzerk_client::AdzerkClient;
///
/// let client = AdzerkClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct AdzerkClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for AdzerkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AdzerkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the decision engine.
    ///
    /// This should include the protocol, e.g. `https://engine.adzerk.net`.
    /// Trailing slashes will be automatically removed. Overriding the
    /// default is mainly useful for tests.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`AdzerkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`](crate::error::ClientError::Http) if the
    /// HTTP client fails to build.
    pub fn build(self) -> Result<AdzerkClient> {
        let base_url =
            Self::normalize_base_url(self.base_url.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()));

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(AdzerkClient { http, base_url })
    }
}
