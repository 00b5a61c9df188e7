//! Main Adzerk API client and its API methods.
//!
//! This module provides the primary [`AdzerkClient`] for requesting native
//! ad decisions and managing UserDB records.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `decisions`: Ad decision request method
//! - `userdb`: User property, interest, and retargeting methods
//! - `pixels`: Fire-and-forget impression tracking
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Request construction and validation (see
//!   [`RequestBuilder`](crate::models::request::RequestBuilder))
//!
//! # Invariants
//! - The client is explicitly constructed and holds no global state; create
//!   one per engine endpoint and share it freely (it is cheap to clone).
//! - Every operation resolves to exactly one outcome: an `Ok` value or an
//!   error, never both.

pub mod builder;

mod decisions;
mod pixels;
mod userdb;

/// Default production decision endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://engine.adzerk.net";

/// Adzerk decision API client.
///
/// # Creating a Client
///
/// Use [`AdzerkClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use adzerk_client::AdzerkClient;
///
/// let client = AdzerkClient::builder().build()?;
/// let response = client.request(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AdzerkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl AdzerkClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing an [`AdzerkClient`].
    pub fn builder() -> builder::AdzerkClientBuilder {
        builder::AdzerkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
