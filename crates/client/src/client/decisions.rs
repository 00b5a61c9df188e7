//! Ad decision API methods for [`AdzerkClient`].

use crate::client::AdzerkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Request, Response};

impl AdzerkClient {
    /// Request ad decisions for the placements described by `request`.
    ///
    /// The returned [`Response`] maps each placement div name to its
    /// decision; placements the engine could not fill map to `None`.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses, and undecodable payloads are
    /// all surfaced as a [`ClientError`](crate::error::ClientError); there
    /// are no retries and no partial results.
    pub async fn request(&self, request: &Request) -> Result<Response> {
        endpoints::request_decisions(&self.http, &self.base_url, request).await
    }
}
