//! Shared request dispatch and status-to-error mapping.
//!
//! Every endpoint call funnels through [`send`]. There is deliberately no
//! retry or backoff here: a call either succeeds against the engine or the
//! failure is surfaced verbatim to the caller.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Execute a request and map non-2xx responses to [`ClientError::Api`].
///
/// # Errors
///
/// Returns [`ClientError::Http`] for transport-level failures and
/// [`ClientError::Api`] with the response body as the message for any
/// non-success status.
pub async fn send(builder: RequestBuilder, path: &str, http_method: &str) -> Result<Response> {
    debug!(path, method = http_method, "dispatching request");

    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(path, status, "request failed");

    Err(ClientError::Api {
        status,
        url,
        message,
    })
}
